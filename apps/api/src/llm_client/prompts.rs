// Shared prompt fragments and prompt-building utilities.
// Each feature module defines its own prompts.rs alongside it.

use crate::models::chat::ChatMessage;

/// System prompt fragment that enforces JSON-only output.
pub const JSON_ONLY_SYSTEM: &str = "You MUST respond with valid JSON only. \
    Do NOT include any text outside the JSON object. \
    Do NOT use markdown code fences. \
    Do NOT include explanations or apologies.";

const NO_HISTORY: &str = "(No previous conversation history)";

/// Builds a feature system prompt: persona line followed by the JSON-only rules.
pub fn json_system(persona: &str) -> String {
    format!("{persona} {JSON_ONLY_SYSTEM}")
}

/// Fills `{key}` slots in one pass, so user text that happens to contain a
/// slot name is never substituted. Unknown `{...}` spans are left as-is.
pub fn fill_template(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len());
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        out.push_str(&rest[..start]);
        let tail = &rest[start..];
        let slot = slots
            .iter()
            .find(|(key, _)| tail[1..].starts_with(*key) && tail[1 + key.len()..].starts_with('}'));
        match slot {
            Some((key, value)) => {
                out.push_str(value);
                rest = &tail[key.len() + 2..];
            }
            None => {
                out.push('{');
                rest = &tail[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Renders a transcript as `role: content` lines for inclusion in a prompt.
pub fn render_chat_history(history: &[ChatMessage]) -> String {
    if history.is_empty() {
        return NO_HISTORY.to_string();
    }
    history
        .iter()
        .map(|m| format!("{}: {}", m.role.as_str(), m.content))
        .collect::<Vec<_>>()
        .join("\n")
}

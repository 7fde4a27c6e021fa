//! Code analysis: explains a snippet, predicts its output and suggests fixes.
//! Nothing is executed; the "output" is the model's simulation.

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::extract::{char_len, non_blank};
use crate::llm_client::prompts::{fill_template, json_system};
use crate::llm_client::{call_json, LlmBackend};
use crate::review::prompts::{
    CODE_PERSONA, CODE_PROMPT_TEMPLATE, GUESS_LANGUAGE_NOTE, UNKNOWN_LANGUAGE,
};

pub const MAX_SNIPPET_CHARS: usize = 5000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct CodeRunnerRequest {
    pub code_snippet: String,
    pub language: Option<String>,
}

#[derive(Debug, Clone)]
pub struct CodeRunnerInput {
    pub code_snippet: String,
    pub language: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct CodeRunnerReply {
    explanation: Option<String>,
    simulated_output: Option<String>,
    suggestions: Option<String>,
    is_executable: Option<bool>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeRunnerOutput {
    pub explanation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub simulated_output: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_executable: Option<bool>,
}

impl CodeRunnerRequest {
    pub fn validate(self) -> Result<CodeRunnerInput, AppError> {
        let trimmed = self.code_snippet.trim();
        if trimmed.is_empty() {
            return Err(AppError::Validation(
                "Code snippet cannot be empty.".to_string(),
            ));
        }
        if char_len(trimmed) > MAX_SNIPPET_CHARS {
            return Err(AppError::Validation(format!(
                "Code snippet is too long. Please provide a snippet under {MAX_SNIPPET_CHARS} characters."
            )));
        }
        Ok(CodeRunnerInput {
            // Indentation inside the snippet matters; only the length check trims.
            code_snippet: self.code_snippet,
            language: non_blank(self.language),
        })
    }
}

pub async fn run_code_and_get_feedback(
    llm: &dyn LlmBackend,
    input: &CodeRunnerInput,
) -> Result<CodeRunnerOutput, AppError> {
    let prompt = build_prompt(input);
    let reply: CodeRunnerReply = call_json(llm, &prompt, &json_system(CODE_PERSONA))
        .await
        .map_err(|e| AppError::Llm(format!("Code analysis call failed: {e}")))?;

    finalize(reply)
}

fn build_prompt(input: &CodeRunnerInput) -> String {
    let (language, language_note) = match &input.language {
        Some(lang) => (lang.as_str(), ""),
        None => (UNKNOWN_LANGUAGE, GUESS_LANGUAGE_NOTE),
    };

    fill_template(
        CODE_PROMPT_TEMPLATE,
        &[
            ("language", language),
            ("language_note", language_note),
            ("code_snippet", input.code_snippet.as_str()),
        ],
    )
}

fn finalize(reply: CodeRunnerReply) -> Result<CodeRunnerOutput, AppError> {
    let explanation = reply
        .explanation
        .filter(|e| !e.trim().is_empty())
        .ok_or_else(|| AppError::Llm("AI returned no explanation for the snippet.".to_string()))?;

    Ok(CodeRunnerOutput {
        explanation,
        simulated_output: reply.simulated_output,
        suggestions: reply.suggestions,
        is_executable: reply.is_executable,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubLlm;

    fn request(code: &str, language: Option<&str>) -> CodeRunnerRequest {
        CodeRunnerRequest {
            code_snippet: code.to_string(),
            language: language.map(str::to_string),
        }
    }

    #[test]
    fn test_blank_snippet_is_rejected() {
        assert!(matches!(
            request("   \n\t", None).validate(),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_snippet_length_limit() {
        assert!(request(&"x".repeat(MAX_SNIPPET_CHARS), None).validate().is_ok());
        assert!(request(&"x".repeat(MAX_SNIPPET_CHARS + 1), None)
            .validate()
            .is_err());
    }

    #[test]
    fn test_blank_language_is_treated_as_absent() {
        let input = request("print(1)", Some("  ")).validate().unwrap();
        assert!(input.language.is_none());
        let prompt = build_prompt(&input);
        assert!(prompt.contains(GUESS_LANGUAGE_NOTE));
        assert!(prompt.contains("```unspecified language"));
    }

    #[test]
    fn test_prompt_embeds_language_and_snippet() {
        let input = request("SELECT * FROM users;", Some("SQL")).validate().unwrap();
        let prompt = build_prompt(&input);
        assert!(prompt.contains("```SQL\nSELECT * FROM users;\n```"));
        assert!(!prompt.contains(GUESS_LANGUAGE_NOTE));
    }

    #[tokio::test]
    async fn test_analysis_through_stub_backend() {
        let llm = StubLlm::replying(&[r#"{
            "explanation": "Prints the number 1.",
            "simulatedOutput": "1",
            "isExecutable": true
        }"#]);

        let input = request("print(1)", Some("Python")).validate().unwrap();
        let out = run_code_and_get_feedback(&llm, &input).await.unwrap();

        assert_eq!(out.simulated_output.as_deref(), Some("1"));
        assert_eq!(out.is_executable, Some(true));
        assert!(out.suggestions.is_none());
    }

    #[tokio::test]
    async fn test_missing_explanation_is_an_llm_error() {
        let llm = StubLlm::replying(&[r#"{"simulatedOutput": "1"}"#]);
        let input = request("print(1)", None).validate().unwrap();
        assert!(matches!(
            run_code_and_get_feedback(&llm, &input).await,
            Err(AppError::Llm(_))
        ));
    }
}

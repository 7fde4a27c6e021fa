//! Resume feedback: scores a pasted resume and lists strengths and fixes.

use serde::{Deserialize, Deserializer, Serialize};

use crate::errors::AppError;
use crate::extract::{char_len, non_blank};
use crate::llm_client::prompts::{fill_template, json_system};
use crate::llm_client::{call_json, LlmBackend};
use crate::review::prompts::{
    NO_TARGET_ROLE_LINE, RESUME_PERSONA, RESUME_PROMPT_TEMPLATE, TARGET_ROLE_LINE,
};
use crate::tutoring::scoring::clamp_score;

pub const MIN_RESUME_CHARS: usize = 50;
pub const MAX_RESUME_CHARS: usize = 15_000;
pub const MAX_TARGET_ROLE_CHARS: usize = 100;
const MAX_OVERALL_SCORE: f64 = 100.0;
const DEFAULT_SUMMARY: &str = "No summary provided.";

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeFeedbackRequest {
    pub resume_text: String,
    pub target_role: Option<String>,
}

/// Validated resume input. `resume_text` is trimmed.
#[derive(Debug, Clone)]
pub struct ResumeFeedbackInput {
    pub resume_text: String,
    pub target_role: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Importance {
    High,
    Medium,
    Low,
}

impl Importance {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Some(Importance::High),
            "medium" => Some(Importance::Medium),
            "low" => Some(Importance::Low),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ImprovementArea {
    pub section: String,
    pub suggestion: String,
    #[serde(
        default,
        deserialize_with = "lenient_importance",
        skip_serializing_if = "Option::is_none"
    )]
    pub importance: Option<Importance>,
}

/// Unrecognised importance labels from the model are dropped rather than
/// failing the whole review.
fn lenient_importance<'de, D>(deserializer: D) -> Result<Option<Importance>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(|v| v.as_str()).and_then(Importance::parse))
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct ResumeFeedbackReply {
    overall_score: Option<f64>,
    summary: Option<String>,
    strengths: Option<Vec<String>>,
    areas_for_improvement: Option<Vec<ImprovementArea>>,
    formatting_and_structure_feedback: Option<Vec<String>>,
    ats_friendliness: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeFeedbackOutput {
    pub overall_score: f64,
    pub summary: String,
    pub strengths: Vec<String>,
    pub areas_for_improvement: Vec<ImprovementArea>,
    pub formatting_and_structure_feedback: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ats_friendliness: Option<String>,
}

impl ResumeFeedbackRequest {
    pub fn validate(self) -> Result<ResumeFeedbackInput, AppError> {
        let resume_text = self.resume_text.trim().to_string();
        let len = char_len(&resume_text);
        if len < MIN_RESUME_CHARS {
            return Err(AppError::Validation(
                "Resume text is too short. Please provide substantial content for effective feedback."
                    .to_string(),
            ));
        }
        if len > MAX_RESUME_CHARS {
            return Err(AppError::Validation(
                "Resume text is too long. Please provide a resume under 15,000 characters."
                    .to_string(),
            ));
        }
        if self
            .target_role
            .as_deref()
            .is_some_and(|r| char_len(r) > MAX_TARGET_ROLE_CHARS)
        {
            return Err(AppError::Validation(format!(
                "Target role is too long (max {MAX_TARGET_ROLE_CHARS} characters)."
            )));
        }
        let target_role = non_blank(self.target_role);
        Ok(ResumeFeedbackInput {
            resume_text,
            target_role,
        })
    }
}

pub async fn get_resume_feedback(
    llm: &dyn LlmBackend,
    input: &ResumeFeedbackInput,
) -> Result<ResumeFeedbackOutput, AppError> {
    let prompt = build_prompt(input);
    let reply: ResumeFeedbackReply = call_json(llm, &prompt, &json_system(RESUME_PERSONA))
        .await
        .map_err(|e| AppError::Llm(format!("Resume feedback call failed: {e}")))?;

    Ok(finalize(reply))
}

fn build_prompt(input: &ResumeFeedbackInput) -> String {
    let target_role_line = match &input.target_role {
        Some(role) => fill_template(TARGET_ROLE_LINE, &[("target_role", role.as_str())]),
        None => NO_TARGET_ROLE_LINE.to_string(),
    };

    fill_template(
        RESUME_PROMPT_TEMPLATE,
        &[
            ("target_role_line", target_role_line.as_str()),
            ("resume_text", input.resume_text.as_str()),
        ],
    )
}

fn finalize(reply: ResumeFeedbackReply) -> ResumeFeedbackOutput {
    ResumeFeedbackOutput {
        overall_score: clamp_score(reply.overall_score.unwrap_or(0.0), MAX_OVERALL_SCORE),
        summary: reply
            .summary
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SUMMARY.to_string()),
        strengths: reply.strengths.unwrap_or_default(),
        areas_for_improvement: reply.areas_for_improvement.unwrap_or_default(),
        formatting_and_structure_feedback: reply
            .formatting_and_structure_feedback
            .unwrap_or_default(),
        ats_friendliness: reply.ats_friendliness,
    }
}

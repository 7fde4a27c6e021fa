//! Mock interview: four questions with qualitative feedback and a final score.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::char_len;
use crate::llm_client::prompts::{fill_template, json_system, render_chat_history};
use crate::llm_client::{call_json, LlmBackend};
use crate::models::chat::ChatMessage;
use crate::models::performance::{today, InterviewEntry, PerformanceUpdate};
use crate::tutoring::prompts::{INTERVIEW_PERSONA, INTERVIEW_PROMPT_TEMPLATE};
use crate::tutoring::scoring::{clamp_score, MAX_ANSWER_SCORE};
use crate::tutoring::MAX_CHAT_HISTORY;

pub const TOTAL_INTERVIEW_QUESTIONS: u32 = 4;
pub const MAX_MESSAGE_CHARS: usize = 2000;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MockInterviewRequest {
    pub username: String,
    pub interview_type: String,
    pub user_message: String,
    pub chat_history: Vec<ChatMessage>,
    pub question_count: u32,
}

#[derive(Debug, Clone)]
pub struct MockInterviewInput {
    pub interview_type: String,
    pub user_message: String,
    pub chat_history: Vec<ChatMessage>,
    pub question_count: u32,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct MockInterviewReply {
    ai_response: Option<String>,
    is_interview_over: Option<bool>,
    answer_feedback: Option<String>,
    overall_feedback: Option<String>,
    interview_score: Option<f64>,
    current_question_count: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MockInterviewOutput {
    pub ai_response: String,
    pub is_interview_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overall_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interview_score: Option<f64>,
    pub current_question_count: u32,
}

impl MockInterviewRequest {
    pub fn validate(self) -> Result<(String, MockInterviewInput), AppError> {
        let username = self.username;
        let interview_type = self.interview_type.trim().to_string();
        if interview_type.is_empty()
            || self.user_message.is_empty()
            || username.trim().is_empty()
        {
            return Err(AppError::Validation(
                "Interview type, user message, and username are required.".to_string(),
            ));
        }
        if char_len(&self.user_message) > MAX_MESSAGE_CHARS {
            return Err(AppError::Validation(format!(
                "Your message is too long. Please keep it under {MAX_MESSAGE_CHARS} characters."
            )));
        }
        if self.chat_history.len() > MAX_CHAT_HISTORY {
            return Err(AppError::Validation("Chat history is too long.".to_string()));
        }
        Ok((
            username,
            MockInterviewInput {
                interview_type,
                user_message: self.user_message,
                chat_history: self.chat_history,
                question_count: self.question_count,
            },
        ))
    }
}

impl MockInterviewInput {
    pub fn history_entry(&self, output: &MockInterviewOutput) -> Option<PerformanceUpdate> {
        if !output.is_interview_over {
            return None;
        }
        Some(PerformanceUpdate {
            interview_entry: Some(InterviewEntry {
                interview_type: self.interview_type.clone(),
                score: output.interview_score?,
                overall_feedback: output.overall_feedback.clone(),
                date: today(),
            }),
            ..Default::default()
        })
    }
}

pub async fn conduct_mock_interview(
    llm: &dyn LlmBackend,
    input: &MockInterviewInput,
) -> Result<MockInterviewOutput, AppError> {
    let prompt = build_prompt(input);
    let reply: MockInterviewReply = call_json(llm, &prompt, &json_system(INTERVIEW_PERSONA))
        .await
        .map_err(|e| AppError::Llm(format!("Mock interview call failed: {e}")))?;

    let output = finalize(input, reply)?;
    if output.is_interview_over {
        info!(
            "Mock interview finished: type={} score={:?}",
            input.interview_type, output.interview_score
        );
    }
    Ok(output)
}

fn build_prompt(input: &MockInterviewInput) -> String {
    let total = TOTAL_INTERVIEW_QUESTIONS.to_string();
    let question_count = input.question_count.to_string();
    let chat_history = render_chat_history(&input.chat_history);

    fill_template(
        INTERVIEW_PROMPT_TEMPLATE,
        &[
            ("interview_type", input.interview_type.as_str()),
            ("total_questions", total.as_str()),
            ("question_count", question_count.as_str()),
            ("chat_history", chat_history.as_str()),
            ("user_message", input.user_message.as_str()),
        ],
    )
}

fn finalize(
    input: &MockInterviewInput,
    reply: MockInterviewReply,
) -> Result<MockInterviewOutput, AppError> {
    let ai_response = reply
        .ai_response
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| AppError::Llm("AI failed to conduct the mock interview.".to_string()))?;

    Ok(MockInterviewOutput {
        ai_response,
        is_interview_over: reply.is_interview_over.unwrap_or(false),
        answer_feedback: reply.answer_feedback,
        overall_feedback: reply.overall_feedback,
        interview_score: reply
            .interview_score
            .map(|s| clamp_score(s, MAX_ANSWER_SCORE)),
        current_question_count: reply
            .current_question_count
            .unwrap_or(input.question_count)
            .max(input.question_count),
    })
}

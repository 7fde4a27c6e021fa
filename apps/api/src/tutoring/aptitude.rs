//! Aptitude tutor: a short graded quiz on quantitative, logical or verbal aptitude.
//!
//! Each turn sends the transcript and the question counter to the model and
//! gets back the next question or feedback. When the model ends the quiz the
//! session average is computed here from the scores the client has collected.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::extract::{char_len, non_blank};
use crate::llm_client::prompts::{fill_template, json_system, render_chat_history};
use crate::llm_client::{call_json, LlmBackend};
use crate::models::chat::ChatMessage;
use crate::models::performance::{today, AptitudeEntry, PerformanceUpdate};
use crate::tutoring::prompts::{APTITUDE_PERSONA, APTITUDE_PROMPT_TEMPLATE};
use crate::tutoring::scoring::{clamp_score, session_average, MAX_ANSWER_SCORE};
use crate::tutoring::MAX_CHAT_HISTORY;

pub const MAX_QUESTIONS_PER_SESSION: u32 = 3;
pub const MAX_MESSAGE_CHARS: usize = 1000;
const DEFAULT_TOPIC: &str = "General";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AptitudeType {
    #[serde(rename = "Quantitative Aptitude")]
    Quantitative,
    #[serde(rename = "Logical Reasoning")]
    LogicalReasoning,
    #[serde(rename = "Verbal Ability")]
    VerbalAbility,
}

impl AptitudeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            AptitudeType::Quantitative => "Quantitative Aptitude",
            AptitudeType::LogicalReasoning => "Logical Reasoning",
            AptitudeType::VerbalAbility => "Verbal Ability",
        }
    }
}

/// One aptitude turn as sent by the client.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AptitudeTutorRequest {
    pub username: String,
    pub aptitude_type: Option<AptitudeType>,
    pub current_topic: Option<String>,
    pub user_message: String,
    pub chat_history: Vec<ChatMessage>,
    pub questions_asked: u32,
    /// Scores of the answers already graded in this session, oldest first.
    pub session_scores: Vec<f64>,
}

/// Validated input for one aptitude turn.
#[derive(Debug, Clone)]
pub struct AptitudeTutorInput {
    pub aptitude_type: AptitudeType,
    pub current_topic: Option<String>,
    pub user_message: String,
    pub chat_history: Vec<ChatMessage>,
    pub questions_asked: u32,
    pub session_scores: Vec<f64>,
}

/// Raw model reply. Every field is optional so a sloppy reply still parses.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct AptitudeTutorReply {
    ai_response: Option<String>,
    detailed_feedback: Option<String>,
    is_question: Option<bool>,
    is_quiz_over: Option<bool>,
    updated_questions_asked: Option<u32>,
    answer_score: Option<f64>,
    average_session_score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AptitudeTutorOutput {
    pub ai_response: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detailed_feedback: Option<String>,
    pub is_question: bool,
    pub is_quiz_over: bool,
    pub updated_questions_asked: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub average_session_score: Option<f64>,
}

impl AptitudeTutorRequest {
    /// Checks required fields and limits. Returns the username and the flow input.
    pub fn validate(self) -> Result<(String, AptitudeTutorInput), AppError> {
        let username = self.username;
        let aptitude_type = match self.aptitude_type {
            Some(t) if !self.user_message.is_empty() && !username.trim().is_empty() => t,
            _ => {
                return Err(AppError::Validation(
                    "Aptitude type, user message, and username are required.".to_string(),
                ))
            }
        };
        if char_len(&self.user_message) > MAX_MESSAGE_CHARS {
            return Err(AppError::Validation(format!(
                "Your message is too long (max {MAX_MESSAGE_CHARS} characters)."
            )));
        }
        if self.chat_history.len() > MAX_CHAT_HISTORY {
            return Err(AppError::Validation(
                "Chat history is too extensive.".to_string(),
            ));
        }

        Ok((
            username,
            AptitudeTutorInput {
                aptitude_type,
                current_topic: non_blank(self.current_topic),
                user_message: self.user_message,
                chat_history: self.chat_history,
                questions_asked: self.questions_asked,
                session_scores: self.session_scores,
            },
        ))
    }
}

impl AptitudeTutorInput {
    /// History entry for a finished session, if there is an average to record.
    pub fn history_entry(&self, output: &AptitudeTutorOutput) -> Option<PerformanceUpdate> {
        if !output.is_quiz_over {
            return None;
        }
        let score = output.average_session_score?;
        Some(PerformanceUpdate {
            aptitude_entry: Some(AptitudeEntry {
                aptitude_type: self.aptitude_type.as_str().to_string(),
                topic: Some(
                    self.current_topic
                        .clone()
                        .unwrap_or_else(|| DEFAULT_TOPIC.to_string()),
                ),
                score,
                date: today(),
            }),
            ..Default::default()
        })
    }
}

/// Runs one aptitude turn against the model and fills in defaults.
pub async fn tutor_aptitude_question(
    llm: &dyn LlmBackend,
    input: &AptitudeTutorInput,
) -> Result<AptitudeTutorOutput, AppError> {
    let prompt = build_prompt(input);
    let reply: AptitudeTutorReply = call_json(llm, &prompt, &json_system(APTITUDE_PERSONA))
        .await
        .map_err(|e| AppError::Llm(format!("Aptitude tutor call failed: {e}")))?;

    let output = finalize(input, reply)?;
    if output.is_quiz_over {
        info!(
            "Aptitude quiz finished: type={} average={:?}",
            input.aptitude_type.as_str(),
            output.average_session_score
        );
    }
    Ok(output)
}

fn build_prompt(input: &AptitudeTutorInput) -> String {
    let (topic_line, topic_clause, next_topic_clause) = match &input.current_topic {
        Some(topic) => (
            format!("They are focusing on the topic: '{topic}'."),
            format!(" and '{topic}'"),
            format!(" (can be same or related to '{topic}')"),
        ),
        None => (String::new(), String::new(), String::new()),
    };

    let max_questions = MAX_QUESTIONS_PER_SESSION.to_string();
    let questions_asked = input.questions_asked.to_string();
    let chat_history = render_chat_history(&input.chat_history);

    fill_template(
        APTITUDE_PROMPT_TEMPLATE,
        &[
            ("aptitude_type", input.aptitude_type.as_str()),
            ("topic_line", topic_line.as_str()),
            ("topic_clause", topic_clause.as_str()),
            ("next_topic_clause", next_topic_clause.as_str()),
            ("max_questions", max_questions.as_str()),
            ("questions_asked", questions_asked.as_str()),
            ("chat_history", chat_history.as_str()),
            ("user_message", input.user_message.as_str()),
        ],
    )
}

fn finalize(
    input: &AptitudeTutorInput,
    reply: AptitudeTutorReply,
) -> Result<AptitudeTutorOutput, AppError> {
    let ai_response = reply
        .ai_response
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| {
            AppError::Llm("AI failed to produce an output for aptitude tutor.".to_string())
        })?;

    let is_quiz_over = reply.is_quiz_over.unwrap_or(false);
    let is_question = if is_quiz_over {
        false
    } else {
        reply.is_question.unwrap_or(true)
    };

    // The counter never moves backwards and never passes the session length.
    let floor = input.questions_asked.min(MAX_QUESTIONS_PER_SESSION);
    let updated_questions_asked = reply
        .updated_questions_asked
        .unwrap_or(input.questions_asked)
        .clamp(floor, MAX_QUESTIONS_PER_SESSION);

    let answer_score = reply.answer_score.map(|s| clamp_score(s, MAX_ANSWER_SCORE));

    let average_session_score = if is_quiz_over {
        reply
            .average_session_score
            .map(|s| clamp_score(s, MAX_ANSWER_SCORE))
            .or_else(|| {
                let mut scores = input.session_scores.clone();
                scores.extend(answer_score);
                session_average(&scores)
            })
    } else {
        None
    };

    Ok(AptitudeTutorOutput {
        ai_response,
        detailed_feedback: reply.detailed_feedback,
        is_question,
        is_quiz_over,
        updated_questions_asked,
        answer_score,
        average_session_score,
    })
}

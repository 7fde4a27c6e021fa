//! Soft-skill quiz: three scored open questions on a soft-skill topic.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::llm_client::prompts::{fill_template, json_system, render_chat_history};
use crate::llm_client::{call_json, LlmBackend};
use crate::models::chat::ChatMessage;
use crate::models::performance::{today, PerformanceUpdate, SoftSkillEntry};
use crate::tutoring::prompts::{SOFT_SKILL_PERSONA, SOFT_SKILL_PROMPT_TEMPLATE};
use crate::tutoring::scoring::{clamp_score, MAX_ANSWER_SCORE};
use crate::tutoring::MAX_CHAT_HISTORY;

pub const TOTAL_QUIZ_QUESTIONS: u32 = 3;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SoftSkillQuizRequest {
    pub username: String,
    pub soft_skill_topic: String,
    pub user_message: String,
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Debug, Clone)]
pub struct SoftSkillQuizInput {
    pub soft_skill_topic: String,
    pub user_message: String,
    pub chat_history: Vec<ChatMessage>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct SoftSkillQuizReply {
    ai_response: Option<String>,
    is_quiz_over: Option<bool>,
    question_feedback: Option<String>,
    answer_score: Option<f64>,
    final_score: Option<f64>,
    quiz_summary: Option<String>,
    total_questions: Option<u32>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SoftSkillQuizOutput {
    pub ai_response: String,
    pub is_quiz_over: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_feedback: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answer_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub final_score: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz_summary: Option<String>,
    pub total_questions: u32,
}

impl SoftSkillQuizRequest {
    pub fn validate(self) -> Result<(String, SoftSkillQuizInput), AppError> {
        let username = self.username;
        let topic = self.soft_skill_topic.trim().to_string();
        if topic.is_empty() || self.user_message.is_empty() || username.trim().is_empty() {
            return Err(AppError::Validation(
                "Topic, user message, and username are required.".to_string(),
            ));
        }
        if self.chat_history.len() > MAX_CHAT_HISTORY {
            return Err(AppError::Validation("Chat history is too long.".to_string()));
        }
        Ok((
            username,
            SoftSkillQuizInput {
                soft_skill_topic: topic,
                user_message: self.user_message,
                chat_history: self.chat_history,
            },
        ))
    }
}

impl SoftSkillQuizInput {
    pub fn history_entry(&self, output: &SoftSkillQuizOutput) -> Option<PerformanceUpdate> {
        if !output.is_quiz_over {
            return None;
        }
        Some(PerformanceUpdate {
            soft_skill_entry: Some(SoftSkillEntry {
                topic: self.soft_skill_topic.clone(),
                final_score: output.final_score?,
                total_questions: output.total_questions,
                date: today(),
            }),
            ..Default::default()
        })
    }
}

pub async fn get_soft_skill_quiz_response(
    llm: &dyn LlmBackend,
    input: &SoftSkillQuizInput,
) -> Result<SoftSkillQuizOutput, AppError> {
    let prompt = build_prompt(input);
    let reply: SoftSkillQuizReply = call_json(llm, &prompt, &json_system(SOFT_SKILL_PERSONA))
        .await
        .map_err(|e| AppError::Llm(format!("Soft-skill quiz call failed: {e}")))?;

    let output = finalize(reply)?;
    if output.is_quiz_over {
        info!(
            "Soft-skill quiz finished: topic={} final_score={:?}/{}",
            input.soft_skill_topic,
            output.final_score,
            output.total_questions * 10
        );
    }
    Ok(output)
}

fn build_prompt(input: &SoftSkillQuizInput) -> String {
    let total = TOTAL_QUIZ_QUESTIONS.to_string();
    let max_score = (TOTAL_QUIZ_QUESTIONS * 10).to_string();
    let chat_history = render_chat_history(&input.chat_history);

    fill_template(
        SOFT_SKILL_PROMPT_TEMPLATE,
        &[
            ("topic", input.soft_skill_topic.as_str()),
            ("total_questions", total.as_str()),
            ("max_score", max_score.as_str()),
            ("chat_history", chat_history.as_str()),
            ("user_message", input.user_message.as_str()),
        ],
    )
}

fn finalize(reply: SoftSkillQuizReply) -> Result<SoftSkillQuizOutput, AppError> {
    let ai_response = reply
        .ai_response
        .filter(|r| !r.trim().is_empty())
        .ok_or_else(|| {
            AppError::Llm("AI failed to generate a response for the soft skill quiz.".to_string())
        })?;

    let total_questions = reply
        .total_questions
        .filter(|n| *n > 0)
        .unwrap_or(TOTAL_QUIZ_QUESTIONS);
    let is_quiz_over = reply.is_quiz_over.unwrap_or(false);

    Ok(SoftSkillQuizOutput {
        ai_response,
        is_quiz_over,
        question_feedback: reply.question_feedback,
        answer_score: reply.answer_score.map(|s| clamp_score(s, MAX_ANSWER_SCORE)),
        final_score: reply
            .final_score
            .map(|s| clamp_score(s, total_questions as f64 * MAX_ANSWER_SCORE)),
        quiz_summary: reply.quiz_summary,
        total_questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::llm_client::testing::StubLlm;

    fn input() -> SoftSkillQuizInput {
        SoftSkillQuizInput {
            soft_skill_topic: "Teamwork & Collaboration".to_string(),
            user_message: "Start the quiz".to_string(),
            chat_history: vec![],
        }
    }

    #[test]
    fn test_validate_requires_all_fields() {
        let req = SoftSkillQuizRequest {
            username: "asha".to_string(),
            soft_skill_topic: String::new(),
            user_message: "hi".to_string(),
            chat_history: vec![],
        };
        assert!(matches!(req.validate(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_prompt_states_question_count_and_max_score() {
        let prompt = build_prompt(&input());
        assert!(prompt.contains("'Teamwork & Collaboration'"));
        assert!(prompt.contains("exactly 3 questions"));
        assert!(prompt.contains("(max 30)"));
    }

    #[test]
    fn test_finalize_defaults_total_questions() {
        let out = finalize(SoftSkillQuizReply {
            ai_response: Some("Question 1: ...".to_string()),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(out.total_questions, TOTAL_QUIZ_QUESTIONS);
        assert!(!out.is_quiz_over);
    }

    #[test]
    fn test_finalize_clamps_final_score_to_quiz_maximum() {
        let out = finalize(SoftSkillQuizReply {
            ai_response: Some("Thanks!".to_string()),
            is_quiz_over: Some(true),
            final_score: Some(42.0),
            total_questions: Some(3),
            ..Default::default()
        })
        .unwrap();
        assert_eq!(out.final_score, Some(30.0));
    }

    #[test]
    fn test_history_entry_requires_final_score() {
        let inp = input();
        let mut out = SoftSkillQuizOutput {
            ai_response: "Thanks!".to_string(),
            is_quiz_over: true,
            question_feedback: None,
            answer_score: Some(8.0),
            final_score: None,
            quiz_summary: None,
            total_questions: 3,
        };
        assert!(inp.history_entry(&out).is_none());

        out.final_score = Some(24.0);
        let entry = inp.history_entry(&out).unwrap().soft_skill_entry.unwrap();
        assert_eq!(entry.topic, "Teamwork & Collaboration");
        assert_eq!(entry.final_score, 24.0);
        assert_eq!(entry.total_questions, 3);
    }

    #[tokio::test]
    async fn test_quiz_turn_through_stub_backend() {
        let llm = StubLlm::replying(&[r#"{
            "aiResponse": "That concludes the quiz.",
            "isQuizOver": true,
            "questionFeedback": "Great example. Score: 9/10.",
            "answerScore": 9,
            "finalScore": 25,
            "quizSummary": "Strong on conflict resolution.",
            "totalQuestions": 3
        }"#]);

        let out = get_soft_skill_quiz_response(&llm, &input()).await.unwrap();

        assert!(out.is_quiz_over);
        assert_eq!(out.answer_score, Some(9.0));
        assert_eq!(out.final_score, Some(25.0));
    }
}

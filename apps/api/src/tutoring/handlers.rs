//! Axum route handlers for the tutoring flows.
//!
//! Each handler validates the turn, runs the flow and, when the model reports
//! the session finished with a score, appends to the user's performance history.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::state::AppState;
use crate::tutoring::aptitude::{tutor_aptitude_question, AptitudeTutorOutput, AptitudeTutorRequest};
use crate::tutoring::interview::{conduct_mock_interview, MockInterviewOutput, MockInterviewRequest};
use crate::tutoring::soft_skill::{
    get_soft_skill_quiz_response, SoftSkillQuizOutput, SoftSkillQuizRequest,
};

/// POST /api/v1/aptitude/turn
pub async fn handle_aptitude_turn(
    State(state): State<AppState>,
    AppJson(request): AppJson<AptitudeTutorRequest>,
) -> Result<Json<AptitudeTutorOutput>, AppError> {
    let (username, input) = request.validate()?;

    let output = tutor_aptitude_question(state.llm.as_ref(), &input).await?;

    if let Some(update) = input.history_entry(&output) {
        state.store.performance.update(&username, update).await?;
    }

    Ok(Json(output))
}

/// POST /api/v1/soft-skills/turn
pub async fn handle_soft_skill_turn(
    State(state): State<AppState>,
    AppJson(request): AppJson<SoftSkillQuizRequest>,
) -> Result<Json<SoftSkillQuizOutput>, AppError> {
    let (username, input) = request.validate()?;

    let output = get_soft_skill_quiz_response(state.llm.as_ref(), &input).await?;

    if let Some(update) = input.history_entry(&output) {
        state.store.performance.update(&username, update).await?;
    }

    Ok(Json(output))
}

/// POST /api/v1/interviews/turn
pub async fn handle_interview_turn(
    State(state): State<AppState>,
    AppJson(request): AppJson<MockInterviewRequest>,
) -> Result<Json<MockInterviewOutput>, AppError> {
    let (username, input) = request.validate()?;

    let output = conduct_mock_interview(state.llm.as_ref(), &input).await?;

    if let Some(update) = input.history_entry(&output) {
        state.store.performance.update(&username, update).await?;
    }

    Ok(Json(output))
}

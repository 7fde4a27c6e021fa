//! Axum route handlers for the review flows.

use axum::{extract::State, Json};

use crate::errors::AppError;
use crate::extract::AppJson;
use crate::review::code_runner::{run_code_and_get_feedback, CodeRunnerOutput, CodeRunnerRequest};
use crate::review::resume::{get_resume_feedback, ResumeFeedbackOutput, ResumeFeedbackRequest};
use crate::state::AppState;

/// POST /api/v1/resume/feedback
pub async fn handle_resume_feedback(
    State(state): State<AppState>,
    AppJson(request): AppJson<ResumeFeedbackRequest>,
) -> Result<Json<ResumeFeedbackOutput>, AppError> {
    let input = request.validate()?;
    let output = get_resume_feedback(state.llm.as_ref(), &input).await?;
    Ok(Json(output))
}

/// POST /api/v1/code/analyze
pub async fn handle_code_analysis(
    State(state): State<AppState>,
    AppJson(request): AppJson<CodeRunnerRequest>,
) -> Result<Json<CodeRunnerOutput>, AppError> {
    let input = request.validate()?;
    let output = run_code_and_get_feedback(state.llm.as_ref(), &input).await?;
    Ok(Json(output))
}

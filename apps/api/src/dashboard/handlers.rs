use axum::{
    extract::{Path, State},
    Json,
};

use crate::dashboard::service::{
    get_my_performance, reset_my_performance, DashboardResponse, ResetResponse,
};
use crate::errors::AppError;
use crate::state::AppState;

/// GET /api/v1/performance/:username
pub async fn handle_get_performance(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<DashboardResponse>, AppError> {
    Ok(Json(get_my_performance(&state.store, &username).await?))
}

/// DELETE /api/v1/performance/:username
pub async fn handle_reset_performance(
    State(state): State<AppState>,
    Path(username): Path<String>,
) -> Result<Json<ResetResponse>, AppError> {
    Ok(Json(reset_my_performance(&state.store, &username).await?))
}

use axum::{extract::State, http::StatusCode, Json};

use crate::auth::service::{login_user, signup_user, AuthResponse};
use crate::errors::AppError;
use crate::extract::AppJson;
use crate::models::user::Credentials;
use crate::state::AppState;

/// POST /api/v1/auth/signup
pub async fn handle_signup(
    State(state): State<AppState>,
    AppJson(credentials): AppJson<Credentials>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    let response = signup_user(&state.store, credentials).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// POST /api/v1/auth/login
pub async fn handle_login(
    State(state): State<AppState>,
    AppJson(credentials): AppJson<Credentials>,
) -> Result<Json<AuthResponse>, AppError> {
    Ok(Json(login_user(&state.store, credentials).await?))
}

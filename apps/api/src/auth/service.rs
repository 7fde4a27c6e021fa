use serde::Serialize;
use tracing::info;
use uuid::Uuid;

use crate::errors::AppError;
use crate::extract::char_len;
use crate::models::user::{Credentials, User};
use crate::store::Store;

pub const MIN_USERNAME_CHARS: usize = 3;
pub const MIN_PASSWORD_CHARS: usize = 6;
const INVALID_LOGIN: &str = "Invalid username or password.";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AuthResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
}

/// Checks credential lengths, reporting every violated rule.
pub fn validate_credentials(credentials: &Credentials) -> Result<(), AppError> {
    let mut problems = Vec::new();
    if char_len(&credentials.username) < MIN_USERNAME_CHARS {
        problems.push(format!(
            "Username must be at least {MIN_USERNAME_CHARS} characters long."
        ));
    }
    if char_len(&credentials.password) < MIN_PASSWORD_CHARS {
        problems.push(format!(
            "Password must be at least {MIN_PASSWORD_CHARS} characters long."
        ));
    }
    if problems.is_empty() {
        Ok(())
    } else {
        Err(AppError::Validation(problems.join(", ")))
    }
}

/// Registers a new user and initialises an empty performance record.
pub async fn signup_user(store: &Store, credentials: Credentials) -> Result<AuthResponse, AppError> {
    validate_credentials(&credentials)?;

    let user = User {
        id: Uuid::new_v4().to_string(),
        username: credentials.username,
        password: credentials.password,
    };
    let username = user.username.clone();

    if !store.users.insert(user).await? {
        return Err(AppError::Conflict("Username already exists.".to_string()));
    }
    store.performance.ensure(&username).await?;

    info!("New user registered: {username}");
    Ok(AuthResponse {
        success: true,
        message: "Signup successful! You can now log in.".to_string(),
        username: None,
    })
}

/// Checks credentials against the store. Unknown user and wrong password
/// produce the same message.
pub async fn login_user(store: &Store, credentials: Credentials) -> Result<AuthResponse, AppError> {
    validate_credentials(&credentials)?;

    let user = store
        .users
        .find(&credentials.username)
        .await?
        .filter(|u| u.password == credentials.password)
        .ok_or_else(|| AppError::Unauthorized(INVALID_LOGIN.to_string()))?;

    Ok(AuthResponse {
        success: true,
        message: "Login successful!".to_string(),
        username: Some(user.username),
    })
}

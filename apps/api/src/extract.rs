use axum::extract::{rejection::JsonRejection, FromRequest};

use crate::errors::AppError;

/// `axum::Json` whose rejection renders through `AppError`, so malformed
/// bodies get the same `{"error": ...}` shape as every other failure.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Validation(rejection.body_text())
    }
}

/// Length in characters, the unit every input limit is expressed in.
pub fn char_len(text: &str) -> usize {
    text.chars().count()
}

/// Treats a blank optional string as absent and trims the rest.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_len_counts_characters_not_bytes() {
        assert_eq!(char_len("Elévix"), 6);
    }

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank(Some("  ".to_string())), None);
        assert_eq!(non_blank(None), None);
        assert_eq!(non_blank(Some(" Rust ".to_string())), Some("Rust".to_string()));
    }
}

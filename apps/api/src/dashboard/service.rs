use serde::Serialize;
use tracing::info;

use crate::dashboard::summary::{compute_summary, PerformanceSummary};
use crate::errors::AppError;
use crate::models::performance::UserPerformanceData;
use crate::store::Store;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub performance: UserPerformanceData,
    pub summary: PerformanceSummary,
}

#[derive(Debug, Clone, Serialize)]
pub struct ResetResponse {
    pub success: bool,
    pub message: String,
}

/// Usernames are store keys and are used exactly as signed up.
fn identified(username: &str) -> Result<&str, AppError> {
    if username.trim().is_empty() {
        return Err(AppError::Validation(
            "User not identified. Please log in.".to_string(),
        ));
    }
    Ok(username)
}

/// A user with no record gets empty histories rather than an error.
pub async fn get_my_performance(store: &Store, username: &str) -> Result<DashboardResponse, AppError> {
    let username = identified(username)?;
    let performance = store.performance.get(username).await?;
    let summary = compute_summary(&performance);
    Ok(DashboardResponse {
        performance,
        summary,
    })
}

pub async fn reset_my_performance(store: &Store, username: &str) -> Result<ResetResponse, AppError> {
    let username = identified(username)?;
    if !store.performance.reset(username).await? {
        return Err(AppError::NotFound(
            "No performance data found for this user to reset.".to_string(),
        ));
    }
    info!("Dashboard statistics reset for {username}");
    Ok(ResetResponse {
        success: true,
        message: "Your dashboard statistics have been reset.".to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::performance::{InterviewEntry, PerformanceUpdate};

    fn interview(score: f64) -> PerformanceUpdate {
        PerformanceUpdate {
            interview_entry: Some(InterviewEntry {
                interview_type: "Behavioral".to_string(),
                score,
                overall_feedback: None,
                date: "2024-06-01".to_string(),
            }),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_unknown_user_gets_empty_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path());

        let dashboard = get_my_performance(&store, "nobody").await.unwrap();
        assert!(dashboard.performance.interview_history.is_empty());
        assert_eq!(dashboard.summary.total_sessions, 0);
    }

    #[tokio::test]
    async fn test_blank_username_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path());
        assert!(matches!(
            get_my_performance(&store, "  ").await,
            Err(AppError::Validation(_))
        ));
    }

    #[tokio::test]
    async fn test_dashboard_includes_summary() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path());
        store.performance.update("asha", interview(6.0)).await.unwrap();
        store.performance.update("asha", interview(8.0)).await.unwrap();

        let dashboard = get_my_performance(&store, "asha").await.unwrap();
        assert_eq!(dashboard.summary.interviews.sessions, 2);
        assert_eq!(dashboard.summary.interviews.average_score, Some(7.0));

        let json = serde_json::to_value(&dashboard).unwrap();
        assert_eq!(json["interviewHistory"].as_array().unwrap().len(), 2);
        assert_eq!(json["summary"]["interviews"]["completionPercent"], 70.0);
    }

    #[tokio::test]
    async fn test_reset_clears_history_and_reports_missing_user() {
        let dir = tempfile::tempdir().unwrap();
        let store = Store::open(dir.path());

        assert!(matches!(
            reset_my_performance(&store, "asha").await,
            Err(AppError::NotFound(_))
        ));

        store.performance.update("asha", interview(9.0)).await.unwrap();
        let reset = reset_my_performance(&store, "asha").await.unwrap();
        assert!(reset.success);

        let dashboard = get_my_performance(&store, "asha").await.unwrap();
        assert!(dashboard.performance.interview_history.is_empty());
    }
}

pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::auth::handlers as auth;
use crate::dashboard::handlers as dashboard;
use crate::review::handlers as review;
use crate::state::AppState;
use crate::tutoring::handlers as tutoring;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Accounts
        .route("/api/v1/auth/signup", post(auth::handle_signup))
        .route("/api/v1/auth/login", post(auth::handle_login))
        // Tutoring sessions (one call per chat turn)
        .route("/api/v1/aptitude/turn", post(tutoring::handle_aptitude_turn))
        .route(
            "/api/v1/soft-skills/turn",
            post(tutoring::handle_soft_skill_turn),
        )
        .route(
            "/api/v1/interviews/turn",
            post(tutoring::handle_interview_turn),
        )
        // One-shot reviews
        .route("/api/v1/resume/feedback", post(review::handle_resume_feedback))
        .route("/api/v1/code/analyze", post(review::handle_code_analysis))
        // Dashboard
        .route(
            "/api/v1/performance/:username",
            get(dashboard::handle_get_performance).delete(dashboard::handle_reset_performance),
        )
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Method, Request, StatusCode},
    };
    use serde_json::{json, Value};
    use tower::ServiceExt;

    use super::*;
    use crate::llm_client::testing::StubLlm;
    use crate::store::Store;

    fn app(dir: &tempfile::TempDir, llm: StubLlm) -> Router {
        build_router(AppState {
            llm: Arc::new(llm),
            store: Arc::new(Store::open(dir.path())),
        })
    }

    async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        let builder = Request::builder().method(method).uri(uri);
        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };
        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let value = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, value)
    }

    #[tokio::test]
    async fn test_health() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir, StubLlm::replying(&[]));
        let (status, body) = send(&app, Method::GET, "/health", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn test_signup_login_flow() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir, StubLlm::replying(&[]));
        let creds = json!({"username": "asha", "password": "secret1"});

        let (status, body) = send(&app, Method::POST, "/api/v1/auth/signup", Some(creds.clone())).await;
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body["success"], true);

        let (status, body) = send(&app, Method::POST, "/api/v1/auth/signup", Some(creds.clone())).await;
        assert_eq!(status, StatusCode::CONFLICT);
        assert_eq!(body["code"], "CONFLICT");

        let (status, body) = send(&app, Method::POST, "/api/v1/auth/login", Some(creds)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["username"], "asha");

        let wrong = json!({"username": "asha", "password": "nope123"});
        let (status, _) = send(&app, Method::POST, "/api/v1/auth/login", Some(wrong)).await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_malformed_body_is_a_validation_error() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir, StubLlm::replying(&[]));
        let request = Request::builder()
            .method(Method::POST)
            .uri("/api/v1/code/analyze")
            .header("content-type", "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let response = app.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_finished_interview_lands_on_dashboard() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(
            &dir,
            StubLlm::replying(&[r#"{
                "aiResponse": "Thank you for your time.",
                "isInterviewOver": true,
                "overallFeedback": "Good examples.",
                "interviewScore": 8,
                "currentQuestionCount": 4
            }"#]),
        );

        let turn = json!({
            "username": "asha",
            "interviewType": "Behavioral",
            "userMessage": "I resolved it by pairing with the other team.",
            "chatHistory": [{"role": "assistant", "content": "Tell me about a conflict."}],
            "questionCount": 4
        });
        let (status, body) = send(&app, Method::POST, "/api/v1/interviews/turn", Some(turn)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["isInterviewOver"], true);

        let (status, body) = send(&app, Method::GET, "/api/v1/performance/asha", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["interviewHistory"][0]["type"], "Behavioral");
        assert_eq!(body["interviewHistory"][0]["score"], 8.0);
        assert_eq!(body["summary"]["interviews"]["sessions"], 1);

        let (status, body) = send(&app, Method::DELETE, "/api/v1/performance/asha", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body["success"], true);

        let (_, body) = send(&app, Method::GET, "/api/v1/performance/asha", None).await;
        assert_eq!(body["interviewHistory"], json!([]));
    }

    #[tokio::test]
    async fn test_sessions_are_keyed_by_the_signed_up_username() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(
            &dir,
            StubLlm::replying(&[r#"{
                "aiResponse": "That concludes our mock interview.",
                "isInterviewOver": true,
                "interviewScore": 7,
                "currentQuestionCount": 4
            }"#]),
        );

        let creds = json!({"username": "asha ", "password": "secret1"});
        let (status, _) = send(&app, Method::POST, "/api/v1/auth/signup", Some(creds)).await;
        assert_eq!(status, StatusCode::CREATED);

        let turn = json!({
            "username": "asha ",
            "interviewType": "Behavioral",
            "userMessage": "We shipped on time.",
            "questionCount": 4
        });
        let (status, _) = send(&app, Method::POST, "/api/v1/interviews/turn", Some(turn)).await;
        assert_eq!(status, StatusCode::OK);

        let (_, body) = send(&app, Method::GET, "/api/v1/performance/asha%20", None).await;
        assert_eq!(body["interviewHistory"].as_array().unwrap().len(), 1);

        let (_, body) = send(&app, Method::GET, "/api/v1/performance/asha", None).await;
        assert_eq!(body["interviewHistory"], json!([]));
    }

    #[tokio::test]
    async fn test_reset_unknown_user_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir, StubLlm::replying(&[]));
        let (status, body) = send(&app, Method::DELETE, "/api/v1/performance/ghost", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["code"], "NOT_FOUND");
    }

    #[tokio::test]
    async fn test_llm_failure_maps_to_bad_gateway() {
        let dir = tempfile::tempdir().unwrap();
        let app = app(&dir, StubLlm::failing("upstream exploded"));
        let body = json!({"codeSnippet": "print(1)", "language": "Python"});
        let (status, body) = send(&app, Method::POST, "/api/v1/code/analyze", Some(body)).await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        assert_eq!(body["code"], "LLM_ERROR");
        assert!(!body["error"].as_str().unwrap().contains("exploded"));
    }
}

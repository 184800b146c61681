use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use serde::Deserialize;
use serde_json::json;

use super::questions::{questionnaire, Question};
use super::service::QuizService;
use super::validation::QuizSubmission;

/// Router builder exposing the quiz intake and questionnaire endpoints.
pub fn quiz_router(service: Arc<QuizService>) -> Router {
    Router::new()
        .route("/api/v1/quiz/submissions", post(submit_handler))
        .route("/api/v1/quiz/questions", get(questions_handler))
        .with_state(service)
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmitQuizRequest {
    #[serde(flatten)]
    pub(crate) answers: QuizSubmission,
    /// Evaluation date override for deterministic callers; defaults to the
    /// server's local date.
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
}

pub(crate) async fn submit_handler(
    State(service): State<Arc<QuizService>>,
    Json(request): Json<SubmitQuizRequest>,
) -> Response {
    let today = request.today.unwrap_or_else(|| Local::now().date_naive());

    match service.submit(&request.answers, today) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(errors) => {
            let payload = json!({ "errors": errors });
            (StatusCode::UNPROCESSABLE_ENTITY, Json(payload)).into_response()
        }
    }
}

pub(crate) async fn questions_handler() -> Json<Vec<Question>> {
    Json(questionnaire())
}

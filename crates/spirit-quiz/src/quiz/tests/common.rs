use std::sync::Arc;

use axum::response::Response;
use axum::Router;
use chrono::NaiveDate;
use serde_json::Value;

use crate::quiz::domain::QuizResponse;
use crate::quiz::router::quiz_router;
use crate::quiz::service::QuizService;
use crate::quiz::validation::{validate, QuizSubmission};

/// Fixed "current date" injected everywhere; tests never read the clock.
pub(super) fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

/// Fully valid submission: the early-bird socialite from the scoring table
/// (2 + 2 + 10 + 10 + 25 = 49).
pub(super) fn submission() -> QuizSubmission {
    answers("yes", "sweet", "summer", "socializing", 10)
}

pub(super) fn answers(
    morning_person: &str,
    favorite_snack: &str,
    favorite_season: &str,
    ideal_activity: &str,
    competitiveness: i64,
) -> QuizSubmission {
    QuizSubmission {
        morning_person: Some(morning_person.to_string()),
        favorite_snack: Some(favorite_snack.to_string()),
        favorite_season: Some(favorite_season.to_string()),
        ideal_activity: Some(ideal_activity.to_string()),
        competitiveness: Some(competitiveness),
        selected_date: Some(today()),
        agree_to_terms: Some(true),
    }
}

pub(super) fn response(
    morning_person: &str,
    favorite_snack: &str,
    favorite_season: &str,
    ideal_activity: &str,
    competitiveness: i64,
) -> QuizResponse {
    validate(
        &answers(
            morning_person,
            favorite_snack,
            favorite_season,
            ideal_activity,
            competitiveness,
        ),
        today(),
    )
    .expect("fixture submission validates")
}

pub(super) fn router() -> Router {
    quiz_router(Arc::new(QuizService::new()))
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 64 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

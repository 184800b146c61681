//! End-to-end specifications for the quiz pipeline through the public
//! facade: raw answers are validated against an injected date, scored, and
//! classified, and invalid answers never reach the scorer.

use chrono::NaiveDate;
use spirit_quiz::quiz::{
    assets, classify, validate, QuizField, QuizService, QuizSubmission, SpiritAnimal,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 14).expect("valid date")
}

fn filled(
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

#[test]
fn representative_submissions_flow_through_to_results() {
    let service = QuizService::new();
    let cases = [
        (filled("yes", "sweet", "summer", "socializing", 10), 49, "Eagle"),
        (filled("no", "savory", "winter", "reading", 1), 10, "Sloth"),
        (filled("yes", "savory", "autumn", "cooking", 6), 21, "Dolphin"),
    ];

    for (submission, expected_score, expected_animal) in cases {
        let result = service
            .submit(&submission, today())
            .expect("submission validates");

        assert_eq!(result.total_score, expected_score);
        assert_eq!(result.spirit_animal, expected_animal);
        assert_eq!(
            result.asset,
            format!(
                "/gifs/spirit-animal-quiz/{}.gif",
                expected_animal.to_lowercase()
            )
        );
    }
}

#[test]
fn repeated_submission_of_identical_answers_is_idempotent() {
    let service = QuizService::new();
    let submission = filled("yes", "savory", "spring", "gaming", 8);

    let first = service.submit(&submission, today()).expect("validates");
    let second = service.submit(&submission, today()).expect("validates");

    assert_eq!(first, second);
}

#[test]
fn rejected_submissions_report_every_failing_field_and_are_never_scored() {
    let service = QuizService::new();
    let mut submission = filled("yes", "sweet", "summer", "socializing", 10);
    submission.selected_date = today().pred_opt();
    submission.agree_to_terms = Some(false);

    let errors = service
        .submit(&submission, today())
        .expect_err("stale date and unchecked terms");

    assert_eq!(errors.len(), 2);
    assert_eq!(
        errors.message(QuizField::SelectedDate),
        Some("The selected date must be today.")
    );
    assert!(errors.contains(QuizField::AgreeToTerms));
}

#[test]
fn validation_exposes_the_typed_response_for_direct_callers() {
    let response = validate(&filled("no", "savory", "winter", "reading", 1), today())
        .expect("validates");

    assert_eq!(classify(i64::from(spirit_quiz::quiz::score(&response))), SpiritAnimal::Sloth);
}

#[test]
fn unknown_result_labels_fall_back_to_the_sloth_asset() {
    assert_eq!(
        assets::display_asset("Chupacabra"),
        "/gifs/spirit-animal-quiz/sloth.gif"
    );
    assert_eq!(
        assets::display_asset("eagle"),
        "/gifs/spirit-animal-quiz/eagle.gif"
    );
}

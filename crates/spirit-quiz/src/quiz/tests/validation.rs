use super::common::*;
use crate::quiz::domain::{Activity, MorningPerson, Season, SnackPreference};
use crate::quiz::validation::{validate, QuizField, QuizSubmission};

#[test]
fn accepts_a_complete_submission() {
    let response = validate(&submission(), today()).expect("submission validates");

    assert_eq!(response.morning_person, MorningPerson::Yes);
    assert_eq!(response.favorite_snack, SnackPreference::Sweet);
    assert_eq!(response.favorite_season, Season::Summer);
    assert_eq!(response.ideal_activity, Activity::Socializing);
    assert_eq!(response.competitiveness, 10);
    assert_eq!(response.selected_date, today());
    assert!(response.agree_to_terms);
}

#[test]
fn rejects_unchecked_terms_without_touching_other_fields() {
    let mut candidate = submission();
    candidate.agree_to_terms = Some(false);

    let errors = validate(&candidate, today()).expect_err("terms must be accepted");

    assert_eq!(errors.len(), 1);
    assert_eq!(
        errors.message(QuizField::AgreeToTerms),
        Some("You must agree to the terms and conditions.")
    );
    assert!(!errors.contains(QuizField::MorningPerson));
}

#[test]
fn rejects_competitiveness_above_the_scale() {
    let mut candidate = submission();
    candidate.competitiveness = Some(11);

    let errors = validate(&candidate, today()).expect_err("11 exceeds the scale");

    assert_eq!(
        errors.message(QuizField::Competitiveness),
        Some("Competitiveness must be between 1 and 10.")
    );
}

#[test]
fn rejects_competitiveness_below_the_scale() {
    let mut candidate = submission();
    candidate.competitiveness = Some(0);

    let errors = validate(&candidate, today()).expect_err("0 is below the scale");

    assert!(errors.contains(QuizField::Competitiveness));
    assert_eq!(errors.len(), 1);
}

#[test]
fn rejects_yesterday_with_the_must_be_today_message() {
    let mut candidate = submission();
    candidate.selected_date = today().pred_opt();

    let errors = validate(&candidate, today()).expect_err("yesterday is not today");

    assert_eq!(
        errors.message(QuizField::SelectedDate),
        Some("The selected date must be today.")
    );
}

#[test]
fn rejects_tomorrow_as_well() {
    let mut candidate = submission();
    candidate.selected_date = today().succ_opt();

    let errors = validate(&candidate, today()).expect_err("tomorrow is not today");

    assert!(errors.contains(QuizField::SelectedDate));
}

#[test]
fn only_exact_calendar_day_equality_passes() {
    use chrono::Datelike;

    // Same month and day-of-month a year later must still be rejected.
    let mut candidate = submission();
    candidate.selected_date =
        chrono::NaiveDate::from_ymd_opt(2027, today().month(), today().day());

    let errors = validate(&candidate, today()).expect_err("different year is not today");
    assert!(errors.contains(QuizField::SelectedDate));
}

#[test]
fn rejects_unknown_choice_text_per_field() {
    let mut candidate = submission();
    candidate.favorite_season = Some("monsoon".to_string());

    let errors = validate(&candidate, today()).expect_err("monsoon is not in the set");

    assert_eq!(errors.len(), 1);
    let message = errors
        .message(QuizField::FavoriteSeason)
        .expect("season error present");
    assert!(message.contains("monsoon"));
}

#[test]
fn does_not_short_circuit_on_the_first_failure() {
    let mut candidate = submission();
    candidate.morning_person = None;
    candidate.competitiveness = Some(99);
    candidate.agree_to_terms = None;

    let errors = validate(&candidate, today()).expect_err("three fields fail");

    assert_eq!(errors.len(), 3);
    assert!(errors.contains(QuizField::MorningPerson));
    assert!(errors.contains(QuizField::Competitiveness));
    assert!(errors.contains(QuizField::AgreeToTerms));
}

#[test]
fn an_empty_submission_reports_every_field() {
    let errors =
        validate(&QuizSubmission::default(), today()).expect_err("nothing is filled in");

    assert_eq!(errors.len(), QuizField::ALL.len());
    for field in QuizField::ALL {
        assert!(errors.contains(*field), "missing error for {:?}", field);
    }
}

#[test]
fn validation_errors_serialize_as_a_field_keyed_object() {
    let mut candidate = submission();
    candidate.agree_to_terms = Some(false);

    let errors = validate(&candidate, today()).expect_err("terms fail");
    let json = serde_json::to_value(&errors).expect("serializes");

    assert_eq!(
        json["agree_to_terms"],
        "You must agree to the terms and conditions."
    );
}

#[test]
fn progress_counts_answered_fields() {
    assert_eq!(QuizSubmission::default().progress_percent(), 0);
    assert_eq!(submission().progress_percent(), 100);

    let halfway = QuizSubmission {
        morning_person: Some("yes".to_string()),
        favorite_snack: Some("sweet".to_string()),
        competitiveness: Some(5),
        ..QuizSubmission::default()
    };
    assert_eq!(halfway.progress_percent(), 42);
}

#[test]
fn progress_ignores_blank_text_and_unchecked_terms() {
    let mut candidate = submission();
    candidate.favorite_season = Some("   ".to_string());
    candidate.agree_to_terms = Some(false);

    // Five of seven fields count: 500 / 7 = 71.
    assert_eq!(candidate.progress_percent(), 71);
}

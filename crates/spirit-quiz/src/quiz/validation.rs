use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::domain::{Activity, MorningPerson, QuizResponse, Season, SnackPreference};

/// Field identifiers keying validation messages. Ordered so aggregated
/// errors iterate in form order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum QuizField {
    MorningPerson,
    FavoriteSnack,
    FavoriteSeason,
    IdealActivity,
    Competitiveness,
    SelectedDate,
    AgreeToTerms,
}

impl QuizField {
    pub const ALL: &'static [QuizField] = &[
        QuizField::MorningPerson,
        QuizField::FavoriteSnack,
        QuizField::FavoriteSeason,
        QuizField::IdealActivity,
        QuizField::Competitiveness,
        QuizField::SelectedDate,
        QuizField::AgreeToTerms,
    ];

    pub fn key(&self) -> &'static str {
        match self {
            QuizField::MorningPerson => "morning_person",
            QuizField::FavoriteSnack => "favorite_snack",
            QuizField::FavoriteSeason => "favorite_season",
            QuizField::IdealActivity => "ideal_activity",
            QuizField::Competitiveness => "competitiveness",
            QuizField::SelectedDate => "selected_date",
            QuizField::AgreeToTerms => "agree_to_terms",
        }
    }
}

/// Raw answers as collected by a form controller. Every field is optional
/// so a partially filled form deserializes cleanly; `competitiveness` is a
/// wide integer so out-of-range values survive long enough to be rejected
/// with a message instead of a deserialization failure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuizSubmission {
    #[serde(default)]
    pub morning_person: Option<String>,
    #[serde(default)]
    pub favorite_snack: Option<String>,
    #[serde(default)]
    pub favorite_season: Option<String>,
    #[serde(default)]
    pub ideal_activity: Option<String>,
    #[serde(default)]
    pub competitiveness: Option<i64>,
    #[serde(default)]
    pub selected_date: Option<NaiveDate>,
    #[serde(default)]
    pub agree_to_terms: Option<bool>,
}

impl QuizSubmission {
    /// Form completion as a percentage of answered fields. A text answer
    /// counts once it is non-blank, numbers and dates once present, and the
    /// terms checkbox only when actually checked.
    pub fn progress_percent(&self) -> u8 {
        let filled = [
            is_answered(&self.morning_person),
            is_answered(&self.favorite_snack),
            is_answered(&self.favorite_season),
            is_answered(&self.ideal_activity),
            self.competitiveness.is_some(),
            self.selected_date.is_some(),
            self.agree_to_terms == Some(true),
        ]
        .into_iter()
        .filter(|answered| *answered)
        .count();

        ((filled * 100) / QuizField::ALL.len()) as u8
    }
}

fn is_answered(value: &Option<String>) -> bool {
    value
        .as_deref()
        .is_some_and(|text| !text.trim().is_empty())
}

/// Per-field validation failures for one submission. Serializes to a flat
/// `field -> message` object so form controllers can render messages inline.
#[derive(Debug, Clone, Default, PartialEq, Eq, thiserror::Error, Serialize)]
#[error("quiz submission failed field validation")]
#[serde(transparent)]
pub struct ValidationErrors {
    errors: BTreeMap<QuizField, String>,
}

impl ValidationErrors {
    pub fn insert(&mut self, field: QuizField, message: impl Into<String>) {
        self.errors.insert(field, message.into());
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn message(&self, field: QuizField) -> Option<&str> {
        self.errors.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: QuizField) -> bool {
        self.errors.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuizField, &str)> + '_ {
        self.errors.iter().map(|(field, msg)| (*field, msg.as_str()))
    }
}

/// Validate a raw submission against the injected current date.
///
/// Every field is checked independently; a failing field never hides
/// failures in the others. On success the returned [`QuizResponse`] is the
/// only value the scoring rules accept.
pub fn validate(
    submission: &QuizSubmission,
    today: NaiveDate,
) -> Result<QuizResponse, ValidationErrors> {
    let mut errors = ValidationErrors::default();

    let morning_person = required_choice(
        &submission.morning_person,
        MorningPerson::parse,
        QuizField::MorningPerson,
        "Please select whether you are a morning person.",
        &mut errors,
    );
    let favorite_snack = required_choice(
        &submission.favorite_snack,
        SnackPreference::parse,
        QuizField::FavoriteSnack,
        "Please select your favorite type of snack.",
        &mut errors,
    );
    let favorite_season = required_choice(
        &submission.favorite_season,
        Season::parse,
        QuizField::FavoriteSeason,
        "Please select your favorite season.",
        &mut errors,
    );
    let ideal_activity = required_choice(
        &submission.ideal_activity,
        Activity::parse,
        QuizField::IdealActivity,
        "Please select your ideal activity.",
        &mut errors,
    );

    let competitiveness = match submission.competitiveness {
        Some(value) if (1..=10).contains(&value) => Some(value as u8),
        Some(_) | None => {
            errors.insert(
                QuizField::Competitiveness,
                "Competitiveness must be between 1 and 10.",
            );
            None
        }
    };

    let selected_date = match submission.selected_date {
        Some(date) if same_calendar_day(date, today) => Some(date),
        Some(_) => {
            errors.insert(QuizField::SelectedDate, "The selected date must be today.");
            None
        }
        None => {
            errors.insert(QuizField::SelectedDate, "Please select today's date.");
            None
        }
    };

    let agree_to_terms = match submission.agree_to_terms {
        Some(true) => Some(true),
        Some(false) | None => {
            errors.insert(
                QuizField::AgreeToTerms,
                "You must agree to the terms and conditions.",
            );
            None
        }
    };

    match (
        morning_person,
        favorite_snack,
        favorite_season,
        ideal_activity,
        competitiveness,
        selected_date,
        agree_to_terms,
    ) {
        (
            Some(morning_person),
            Some(favorite_snack),
            Some(favorite_season),
            Some(ideal_activity),
            Some(competitiveness),
            Some(selected_date),
            Some(agree_to_terms),
        ) => Ok(QuizResponse {
            morning_person,
            favorite_snack,
            favorite_season,
            ideal_activity,
            competitiveness,
            selected_date,
            agree_to_terms,
        }),
        _ => Err(errors),
    }
}

fn required_choice<T>(
    raw: &Option<String>,
    parse: fn(&str) -> Option<T>,
    field: QuizField,
    missing_message: &str,
    errors: &mut ValidationErrors,
) -> Option<T> {
    match raw.as_deref() {
        None => {
            errors.insert(field, missing_message);
            None
        }
        Some(value) => match parse(value) {
            Some(choice) => Some(choice),
            None => {
                errors.insert(
                    field,
                    format!("'{}' is not a recognized choice.", value.trim()),
                );
                None
            }
        },
    }
}

/// The date constraint compares year, month, and day-of-month explicitly;
/// "some date this week" is not good enough.
fn same_calendar_day(candidate: NaiveDate, today: NaiveDate) -> bool {
    candidate.year() == today.year()
        && candidate.month() == today.month()
        && candidate.day() == today.day()
}

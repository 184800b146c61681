//! The questionnaire as data, so form controllers can render prompts and
//! option sets without hardcoding them.

use serde::Serialize;

use super::domain::{Activity, MorningPerson, Season, SnackPreference};
use super::validation::QuizField;

/// Widget a form controller renders for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WidgetKind {
    Radio,
    Select,
    Slider,
    DatePicker,
    Checkbox,
}

/// Slider bounds for the competitiveness question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SliderRange {
    pub min: u8,
    pub max: u8,
    pub default: u8,
}

/// One questionnaire entry: the field it feeds, its prompt, the widget
/// kind, and the closed option set for choice fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Question {
    pub field: QuizField,
    pub prompt: &'static str,
    pub widget: WidgetKind,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub range: Option<SliderRange>,
}

/// The seven questions, in form order.
pub fn questionnaire() -> Vec<Question> {
    vec![
        Question {
            field: QuizField::MorningPerson,
            prompt: "Are you a morning person?",
            widget: WidgetKind::Radio,
            options: MorningPerson::ALL.iter().map(|c| c.as_str()).collect(),
            range: None,
        },
        Question {
            field: QuizField::FavoriteSnack,
            prompt: "What's your favorite type of snack?",
            widget: WidgetKind::Select,
            options: SnackPreference::ALL.iter().map(|c| c.as_str()).collect(),
            range: None,
        },
        Question {
            field: QuizField::FavoriteSeason,
            prompt: "What's your favorite season?",
            widget: WidgetKind::Select,
            options: Season::ALL.iter().map(|c| c.as_str()).collect(),
            range: None,
        },
        Question {
            field: QuizField::IdealActivity,
            prompt: "What's your ideal activity on your day off?",
            widget: WidgetKind::Select,
            options: Activity::ALL.iter().map(|c| c.as_str()).collect(),
            range: None,
        },
        Question {
            field: QuizField::Competitiveness,
            prompt: "On a scale of 1-10, how competitive are you?",
            widget: WidgetKind::Slider,
            options: Vec::new(),
            range: Some(SliderRange {
                min: 1,
                max: 10,
                default: 5,
            }),
        },
        Question {
            field: QuizField::SelectedDate,
            prompt: "Select today's date",
            widget: WidgetKind::DatePicker,
            options: Vec::new(),
            range: None,
        },
        Question {
            field: QuizField::AgreeToTerms,
            prompt: "I agree to the terms and conditions",
            widget: WidgetKind::Checkbox,
            options: Vec::new(),
            range: None,
        },
    ]
}

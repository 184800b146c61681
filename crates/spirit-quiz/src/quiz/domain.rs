use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Answer to the morning-person question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MorningPerson {
    Yes,
    No,
}

impl MorningPerson {
    pub const ALL: &'static [MorningPerson] = &[MorningPerson::Yes, MorningPerson::No];

    pub fn as_str(&self) -> &'static str {
        match self {
            MorningPerson::Yes => "yes",
            MorningPerson::No => "no",
        }
    }

    /// Parse the wire token for this answer. Unknown tokens are rejected,
    /// never coerced to a default.
    pub fn parse(value: &str) -> Option<Self> {
        let token = value.trim();
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}

/// Snack preference answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SnackPreference {
    Sweet,
    Savory,
}

impl SnackPreference {
    pub const ALL: &'static [SnackPreference] =
        &[SnackPreference::Sweet, SnackPreference::Savory];

    pub fn as_str(&self) -> &'static str {
        match self {
            SnackPreference::Sweet => "sweet",
            SnackPreference::Savory => "savory",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let token = value.trim();
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}

/// Favorite season answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Season {
    Spring,
    Summer,
    Autumn,
    Winter,
}

impl Season {
    pub const ALL: &'static [Season] = &[
        Season::Spring,
        Season::Summer,
        Season::Autumn,
        Season::Winter,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Season::Spring => "spring",
            Season::Summer => "summer",
            Season::Autumn => "autumn",
            Season::Winter => "winter",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let token = value.trim();
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}

/// Ideal day-off activity answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Activity {
    Reading,
    Hiking,
    Cooking,
    Gaming,
    Socializing,
}

impl Activity {
    pub const ALL: &'static [Activity] = &[
        Activity::Reading,
        Activity::Hiking,
        Activity::Cooking,
        Activity::Gaming,
        Activity::Socializing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Activity::Reading => "reading",
            Activity::Hiking => "hiking",
            Activity::Cooking => "cooking",
            Activity::Gaming => "gaming",
            Activity::Socializing => "socializing",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        let token = value.trim();
        Self::ALL.iter().copied().find(|c| c.as_str() == token)
    }
}

/// A fully validated set of quiz answers. Constructed only by
/// [`crate::quiz::validation::validate`]; immutable once produced and the
/// sole input accepted by the scoring rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResponse {
    pub morning_person: MorningPerson,
    pub favorite_snack: SnackPreference,
    pub favorite_season: Season,
    pub ideal_activity: Activity,
    /// Self-rated competitiveness, guaranteed within 1..=10.
    pub competitiveness: u8,
    /// Equal to the current date injected at validation time.
    pub selected_date: NaiveDate,
    pub agree_to_terms: bool,
}

/// The six quiz outcomes. Serialized by label so API consumers see the
/// display name directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SpiritAnimal {
    Sloth,
    Owl,
    Dolphin,
    Wolf,
    Eagle,
    Lion,
}

impl SpiritAnimal {
    pub const ALL: &'static [SpiritAnimal] = &[
        SpiritAnimal::Sloth,
        SpiritAnimal::Owl,
        SpiritAnimal::Dolphin,
        SpiritAnimal::Wolf,
        SpiritAnimal::Eagle,
        SpiritAnimal::Lion,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            SpiritAnimal::Sloth => "Sloth",
            SpiritAnimal::Owl => "Owl",
            SpiritAnimal::Dolphin => "Dolphin",
            SpiritAnimal::Wolf => "Wolf",
            SpiritAnimal::Eagle => "Eagle",
            SpiritAnimal::Lion => "Lion",
        }
    }

    /// Lower-cased label used to key display assets.
    pub fn asset_key(&self) -> &'static str {
        match self {
            SpiritAnimal::Sloth => "sloth",
            SpiritAnimal::Owl => "owl",
            SpiritAnimal::Dolphin => "dolphin",
            SpiritAnimal::Wolf => "wolf",
            SpiritAnimal::Eagle => "eagle",
            SpiritAnimal::Lion => "lion",
        }
    }

    /// Resolve label text back to an animal, tolerating case differences
    /// from display layers.
    pub fn from_label(value: &str) -> Option<Self> {
        let token = value.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|animal| animal.label().eq_ignore_ascii_case(token))
    }
}

impl fmt::Display for SpiritAnimal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Factors contributing to a score, used to key audit components.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreFactor {
    MorningPerson,
    FavoriteSnack,
    FavoriteSeason,
    IdealActivity,
    Competitiveness,
}

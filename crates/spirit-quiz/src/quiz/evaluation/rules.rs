use super::bands::{first_at_or_above, Band};
use super::ScoreComponent;
use crate::quiz::domain::{
    Activity, MorningPerson, QuizResponse, ScoreFactor, Season, SnackPreference,
};

/// Bonus bands, highest first; only the first matching band applies, the
/// bands are never summed.
const COMPETITIVENESS_BONUS: &[Band<u32>] = &[
    Band {
        threshold: 10,
        value: 25,
    },
    Band {
        threshold: 8,
        value: 10,
    },
    Band {
        threshold: 5,
        value: 2,
    },
    Band {
        threshold: 3,
        value: 1,
    },
];

pub(crate) fn morning_person_points(answer: MorningPerson) -> u32 {
    match answer {
        MorningPerson::Yes => 2,
        MorningPerson::No => 0,
    }
}

pub(crate) fn snack_points(answer: SnackPreference) -> u32 {
    match answer {
        SnackPreference::Sweet => 2,
        SnackPreference::Savory => 8,
    }
}

pub(crate) fn season_points(answer: Season) -> u32 {
    match answer {
        Season::Spring => 2,
        Season::Summer => 10,
        Season::Autumn => 4,
        Season::Winter => 1,
    }
}

pub(crate) fn activity_points(answer: Activity) -> u32 {
    match answer {
        Activity::Reading => 1,
        Activity::Hiking => 2,
        Activity::Cooking => 5,
        Activity::Gaming => 4,
        Activity::Socializing => 10,
    }
}

pub(crate) fn competitiveness_bonus(level: u8) -> u32 {
    first_at_or_above(COMPETITIVENESS_BONUS, i64::from(level), 0)
}

/// Sum the per-field contributions and the competitiveness bonus. Each
/// contribution is independent of every other answer; there are no
/// cross-field terms.
pub(crate) fn score_response(response: &QuizResponse) -> (Vec<ScoreComponent>, u32) {
    let mut components = Vec::with_capacity(5);
    let mut total: u32 = 0;

    let points = morning_person_points(response.morning_person);
    components.push(ScoreComponent {
        factor: ScoreFactor::MorningPerson,
        points,
        notes: format!("answered '{}'", response.morning_person.as_str()),
    });
    total += points;

    let points = snack_points(response.favorite_snack);
    components.push(ScoreComponent {
        factor: ScoreFactor::FavoriteSnack,
        points,
        notes: format!("prefers {} snacks", response.favorite_snack.as_str()),
    });
    total += points;

    let points = season_points(response.favorite_season);
    components.push(ScoreComponent {
        factor: ScoreFactor::FavoriteSeason,
        points,
        notes: format!("favors {}", response.favorite_season.as_str()),
    });
    total += points;

    let points = activity_points(response.ideal_activity);
    components.push(ScoreComponent {
        factor: ScoreFactor::IdealActivity,
        points,
        notes: format!("spends days off {}", response.ideal_activity.as_str()),
    });
    total += points;

    let points = competitiveness_bonus(response.competitiveness);
    components.push(ScoreComponent {
        factor: ScoreFactor::Competitiveness,
        points,
        notes: format!(
            "competitiveness {} of 10 grants a {} point bonus",
            response.competitiveness, points
        ),
    });
    total += points;

    (components, total)
}

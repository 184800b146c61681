use super::bands::{first_at_or_below, Band};
use crate::quiz::domain::SpiritAnimal;

/// Classification bands, lowest first. Half-open on both ends: the Sloth
/// band is unbounded below, anything past the Eagle band is a Lion.
const ANIMAL_BANDS: &[Band<SpiritAnimal>] = &[
    Band {
        threshold: 10,
        value: SpiritAnimal::Sloth,
    },
    Band {
        threshold: 20,
        value: SpiritAnimal::Owl,
    },
    Band {
        threshold: 30,
        value: SpiritAnimal::Dolphin,
    },
    Band {
        threshold: 40,
        value: SpiritAnimal::Wolf,
    },
    Band {
        threshold: 50,
        value: SpiritAnimal::Eagle,
    },
];

/// Map a score to its spirit animal. Total over every integer, so callers
/// never need to range-check first; negative scores land on Sloth.
pub fn classify(score: i64) -> SpiritAnimal {
    first_at_or_below(ANIMAL_BANDS, score, SpiritAnimal::Lion)
}

use crate::quiz::domain::SpiritAnimal;
use crate::quiz::evaluation::classify;

#[test]
fn bands_partition_the_integers_at_every_boundary() {
    let boundaries = [
        (10, SpiritAnimal::Sloth),
        (11, SpiritAnimal::Owl),
        (20, SpiritAnimal::Owl),
        (21, SpiritAnimal::Dolphin),
        (30, SpiritAnimal::Dolphin),
        (31, SpiritAnimal::Wolf),
        (40, SpiritAnimal::Wolf),
        (41, SpiritAnimal::Eagle),
        (50, SpiritAnimal::Eagle),
        (51, SpiritAnimal::Lion),
    ];

    for (score, expected) in boundaries {
        assert_eq!(classify(score), expected, "score {score}");
    }
}

#[test]
fn negative_scores_are_sloths_by_convention() {
    assert_eq!(classify(0), SpiritAnimal::Sloth);
    assert_eq!(classify(-1), SpiritAnimal::Sloth);
    assert_eq!(classify(i64::MIN), SpiritAnimal::Sloth);
}

#[test]
fn anything_past_fifty_is_a_lion() {
    assert_eq!(classify(55), SpiritAnimal::Lion);
    assert_eq!(classify(i64::MAX), SpiritAnimal::Lion);
}

#[test]
fn every_integer_in_the_working_range_maps_to_exactly_one_animal() {
    for score in -20..=80 {
        // classify is total; the call itself must never panic, and each
        // animal's band must be contiguous.
        let animal = classify(score);
        let again = classify(score);
        assert_eq!(animal, again);
    }
}

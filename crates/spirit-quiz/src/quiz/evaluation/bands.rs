//! Shared first-matching-band helper.
//!
//! Both rule tables in this module tree (the competitiveness bonus and the
//! score-to-animal classification) are ordered lists of `(threshold, value)`
//! pairs scanned in declared order; the first band whose predicate holds
//! wins and later bands are never consulted.

pub(crate) struct Band<T> {
    pub(crate) threshold: i64,
    pub(crate) value: T,
}

/// First band whose threshold the probe meets or exceeds. Used for tables
/// declared highest-threshold-first, like the competitiveness bonus.
pub(crate) fn first_at_or_above<T: Copy>(bands: &[Band<T>], probe: i64, fallback: T) -> T {
    bands
        .iter()
        .find(|band| probe >= band.threshold)
        .map(|band| band.value)
        .unwrap_or(fallback)
}

/// First band whose threshold the probe does not exceed. Used for tables
/// declared lowest-threshold-first, like the animal classification.
pub(crate) fn first_at_or_below<T: Copy>(bands: &[Band<T>], probe: i64, fallback: T) -> T {
    bands
        .iter()
        .find(|band| probe <= band.threshold)
        .map(|band| band.value)
        .unwrap_or(fallback)
}

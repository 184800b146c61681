//! Quiz answer intake, validation, and evaluation.
//!
//! The pipeline is deliberately pure: [`validation::validate`] turns a raw
//! submission plus an injected current date into a typed [`QuizResponse`] or
//! a per-field error map, and only validated responses ever reach the
//! scoring rules. Nothing in this module reads the clock or holds state
//! between submissions.

pub mod assets;
pub mod domain;
pub mod evaluation;
pub mod questions;
pub mod router;
pub mod service;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{
    Activity, MorningPerson, QuizResponse, ScoreFactor, Season, SnackPreference, SpiritAnimal,
};
pub use evaluation::{classify, score, EvaluationEngine, EvaluationOutcome, ScoreComponent};
pub use router::quiz_router;
pub use service::{QuizResultView, QuizService};
pub use validation::{validate, QuizField, QuizSubmission, ValidationErrors};

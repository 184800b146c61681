mod bands;
mod policy;
mod rules;

pub use policy::classify;

use serde::{Deserialize, Serialize};

use super::domain::{QuizResponse, ScoreFactor, SpiritAnimal};

/// Total score for a validated response. Deterministic; the same response
/// always yields the same integer.
pub fn score(response: &QuizResponse) -> u32 {
    rules::score_response(response).1
}

/// Stateless evaluator applying the fixed scoring rules to a validated
/// response and classifying the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationEngine;

impl EvaluationEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn evaluate(&self, response: &QuizResponse) -> EvaluationOutcome {
        let (components, total_score) = rules::score_response(response);
        let spirit_animal = policy::classify(i64::from(total_score));

        EvaluationOutcome {
            total_score,
            spirit_animal,
            components,
        }
    }
}

/// Discrete contribution to a score, kept so result screens can show where
/// the points came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreComponent {
    pub factor: ScoreFactor,
    pub points: u32,
    pub notes: String,
}

/// Evaluation output describing the composite score, its classification,
/// and the contribution trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationOutcome {
    pub total_score: u32,
    pub spirit_animal: SpiritAnimal,
    pub components: Vec<ScoreComponent>,
}

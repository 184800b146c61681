use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::assets;
use super::evaluation::{EvaluationEngine, ScoreComponent};
use super::validation::{validate, QuizSubmission, ValidationErrors};

/// Facade composing validation and evaluation for delivery layers.
///
/// Holds no state between submissions: submitting the same answers twice
/// produces the same result, and nothing is retained afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct QuizService {
    engine: EvaluationEngine,
}

impl QuizService {
    pub fn new() -> Self {
        Self {
            engine: EvaluationEngine::new(),
        }
    }

    /// Validate a raw submission against the injected current date and, only
    /// on acceptance, score and classify it. The evaluation engine is never
    /// reached with an incomplete or invalid submission.
    pub fn submit(
        &self,
        submission: &QuizSubmission,
        today: NaiveDate,
    ) -> Result<QuizResultView, ValidationErrors> {
        let response = validate(submission, today)?;
        let outcome = self.engine.evaluate(&response);

        Ok(QuizResultView {
            total_score: outcome.total_score,
            spirit_animal: outcome.spirit_animal.label().to_string(),
            asset: assets::asset_path(outcome.spirit_animal),
            components: outcome.components,
        })
    }
}

/// Result payload rendered by form controllers: the score, the animal's
/// display label, the asset to show, and the contribution trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResultView {
    pub total_score: u32,
    pub spirit_animal: String,
    pub asset: String,
    pub components: Vec<ScoreComponent>,
}

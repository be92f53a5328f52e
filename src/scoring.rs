//! Fitted scorer, threshold calibration, and per-message predictions.
use ndarray::Array1;

use crate::error::PipelineError;
use crate::featurize::TextFeaturizer;
use crate::models::logistic::LogisticRegression;

/// One prediction for one message. Created fresh per call, never persisted.
///
/// `score` is the raw decision-function margin; `probability` is its sigmoid.
#[derive(Debug, Clone, PartialEq)]
pub struct Prediction {
    pub is_spam: bool,
    pub score: f32,
    pub probability: f32,
}

/// A fitted featurizer paired with the model trained on its output.
///
/// Construction checks that the model's weight dimensionality matches the
/// featurizer vocabulary, so a scorer assembled from mismatched parts is
/// rejected before it can ever mis-score a message.
#[derive(Debug, Clone)]
pub struct SpamScorer {
    featurizer: TextFeaturizer,
    model: LogisticRegression,
}

impl SpamScorer {
    pub fn new(
        featurizer: TextFeaturizer,
        model: LogisticRegression,
    ) -> Result<Self, PipelineError> {
        let expected = model.dimension()?;
        let actual = featurizer.dimension()?;
        if expected != actual {
            return Err(PipelineError::InconsistentFeaturizer { expected, actual });
        }
        Ok(SpamScorer { featurizer, model })
    }

    /// Raw margin and probability for one message.
    pub fn score(&self, message: &str) -> Result<(f32, f32), PipelineError> {
        let features = Array1::from_vec(self.featurizer.transform(message)?);
        let score = self.model.score_one(features.view())?;
        let probability = self.model.predict_proba_one(features.view())?;
        Ok((score, probability))
    }

    pub fn featurizer(&self) -> &TextFeaturizer {
        &self.featurizer
    }
}

/// A fitted scorer plus the probability cutoff for the boolean decision.
///
/// Built by [`calibrate`]; wraps the scorer without retraining or mutating
/// it. Immutable after construction and safe to share across threads for
/// read-only prediction.
#[derive(Debug, Clone)]
pub struct CalibratedScorer {
    scorer: SpamScorer,
    threshold: f32,
}

/// Wrap a fitted scorer with a decision threshold.
///
/// The threshold must lie in `[0, 1]`; the check runs before anything else
/// so a bad value never reaches the model.
pub fn calibrate(scorer: SpamScorer, threshold: f32) -> Result<CalibratedScorer, PipelineError> {
    if !(0.0..=1.0).contains(&threshold) {
        return Err(PipelineError::InvalidThreshold(threshold));
    }
    Ok(CalibratedScorer { scorer, threshold })
}

impl CalibratedScorer {
    pub fn predict(&self, message: &str) -> Result<Prediction, PipelineError> {
        let (score, probability) = self.scorer.score(message)?;
        Ok(Prediction {
            is_spam: probability >= self.threshold,
            score,
            probability,
        })
    }

    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    pub fn scorer(&self) -> &SpamScorer {
        &self.scorer
    }

    /// The same fitted scorer under a different cutoff; no retraining.
    pub fn with_threshold(&self, threshold: f32) -> Result<CalibratedScorer, PipelineError> {
        calibrate(self.scorer.clone(), threshold)
    }
}

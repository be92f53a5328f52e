use serde::{Deserialize, Serialize};

use crate::error::PipelineError;

/// Central configuration for one pipeline run.
///
/// Everything that the learning process depends on — fold count, decision
/// threshold, shuffle seed, trainer hyper-parameters — is carried here
/// explicitly and passed into `SpamPipeline::new`. There is no ambient
/// process-global learning context.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PipelineConfig {
    /// Number of cross-validation folds for the diagnostic AUC.
    pub num_folds: usize,
    /// Probability cutoff for the spam decision. The default sits well below
    /// 0.5: most SMS traffic is ham, and the natural cutoff under-flags spam.
    pub decision_threshold: f32,
    /// Seed for the fold shuffle. Same seed, same folds.
    pub seed: u64,
    pub trainer: TrainerParams,
}

/// Hyper-parameters for the logistic trainer.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct TrainerParams {
    pub learning_rate: f32,
    pub max_iterations: usize,
    pub l2_regularization: f32,
    /// Stop early once the per-epoch loss improvement falls below this.
    pub convergence_tolerance: f32,
}

impl Default for TrainerParams {
    fn default() -> Self {
        Self {
            learning_rate: 0.5,
            max_iterations: 500,
            l2_regularization: 1e-3,
            convergence_tolerance: 1e-6,
        }
    }
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            num_folds: 5,
            decision_threshold: 0.15,
            seed: 42,
            trainer: TrainerParams::default(),
        }
    }
}

impl PipelineConfig {
    /// Check the parts of the configuration that can be rejected without
    /// touching any data or model. Called by `SpamPipeline::new` so a bad
    /// threshold or fold count surfaces before anything else runs.
    pub fn validate(&self) -> Result<(), PipelineError> {
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(PipelineError::InvalidThreshold(self.decision_threshold));
        }
        if self.num_folds < 2 {
            return Err(PipelineError::InvalidFoldCount {
                num_folds: self.num_folds,
                num_rows: 0,
            });
        }
        Ok(())
    }
}

//! Logistic regression trained by full-batch gradient descent.
//!
//! Zero-initialized weights, a fixed step size, L2 weight decay, and an early
//! stop once the per-epoch loss improvement falls under the configured
//! tolerance. The optimizer is deterministic: the same examples and the same
//! hyper-parameters always produce the same fitted weights.
use ndarray::{Array1, Array2, ArrayView1};

use crate::config::TrainerParams;
use crate::error::PipelineError;
use crate::models::classifier_trait::ClassifierModel;

/// Clamp for probabilities entering the log-loss, to keep `ln` finite.
const LOSS_EPS: f32 = 1e-7;

fn sigmoid(z: f32) -> f32 {
    1.0 / (1.0 + (-z).exp())
}

/// Linear binary classifier over TF-IDF features.
#[derive(Debug, Clone)]
pub struct LogisticRegression {
    params: TrainerParams,
    weights: Option<Array1<f32>>,
    bias: f32,
}

impl LogisticRegression {
    pub fn new(params: TrainerParams) -> Self {
        LogisticRegression {
            params,
            weights: None,
            bias: 0.0,
        }
    }

    fn fitted_weights(&self) -> Result<&Array1<f32>, PipelineError> {
        self.weights.as_ref().ok_or(PipelineError::NotFitted)
    }

    /// Number of features the fitted model expects.
    pub fn dimension(&self) -> Result<usize, PipelineError> {
        Ok(self.fitted_weights()?.len())
    }

    /// Margin for a single feature vector.
    pub fn score_one(&self, features: ArrayView1<f32>) -> Result<f32, PipelineError> {
        let weights = self.fitted_weights()?;
        if features.len() != weights.len() {
            return Err(PipelineError::InconsistentFeaturizer {
                expected: weights.len(),
                actual: features.len(),
            });
        }
        Ok(weights.dot(&features) + self.bias)
    }

    /// Probability for a single feature vector.
    pub fn predict_proba_one(&self, features: ArrayView1<f32>) -> Result<f32, PipelineError> {
        Ok(sigmoid(self.score_one(features)?))
    }

    fn mean_log_loss(probs: &Array1<f32>, targets: &Array1<f32>) -> f32 {
        let n = probs.len() as f32;
        probs
            .iter()
            .zip(targets.iter())
            .map(|(&p, &t)| {
                let p = p.clamp(LOSS_EPS, 1.0 - LOSS_EPS);
                -(t * p.ln() + (1.0 - t) * (1.0 - p).ln())
            })
            .sum::<f32>()
            / n
    }
}

impl ClassifierModel for LogisticRegression {
    fn fit(&mut self, x: &Array2<f32>, y: &[bool]) -> Result<(), PipelineError> {
        let n_samples = x.nrows();
        if n_samples == 0 || y.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }
        if x.nrows() != y.len() {
            return Err(PipelineError::DataFormat(format!(
                "feature matrix has {} rows but {} labels were given",
                x.nrows(),
                y.len()
            )));
        }
        let n_spam = y.iter().filter(|&&v| v).count();
        if n_spam == 0 || n_spam == y.len() {
            return Err(PipelineError::DegenerateLabels);
        }

        let n_features = x.ncols();
        let targets = Array1::from_iter(y.iter().map(|&v| if v { 1.0f32 } else { 0.0 }));
        let mut weights = Array1::<f32>::zeros(n_features);
        let mut bias = 0.0f32;
        let n = n_samples as f32;
        let lr = self.params.learning_rate;
        let l2 = self.params.l2_regularization;

        let mut prev_loss = f32::INFINITY;
        for epoch in 0..self.params.max_iterations {
            let margins = x.dot(&weights) + bias;
            let probs = margins.mapv(sigmoid);
            let residual = &probs - &targets;

            let mut grad_w = x.t().dot(&residual) / n;
            grad_w = grad_w + &weights * l2;
            let grad_b = residual.sum() / n;

            weights = weights - &grad_w * lr;
            bias -= grad_b * lr;

            let loss = Self::mean_log_loss(&probs, &targets);
            if epoch % 50 == 0 {
                log::debug!("epoch {}: log-loss {:.6}", epoch, loss);
            }
            if (prev_loss - loss).abs() < self.params.convergence_tolerance {
                log::debug!("converged at epoch {} with log-loss {:.6}", epoch, loss);
                break;
            }
            prev_loss = loss;
        }

        self.weights = Some(weights);
        self.bias = bias;
        Ok(())
    }

    fn decision_function(&self, x: &Array2<f32>) -> Result<Vec<f32>, PipelineError> {
        let weights = self.fitted_weights()?;
        if x.ncols() != weights.len() {
            return Err(PipelineError::InconsistentFeaturizer {
                expected: weights.len(),
                actual: x.ncols(),
            });
        }
        Ok((x.dot(weights) + self.bias).to_vec())
    }

    fn predict_proba(&self, x: &Array2<f32>) -> Result<Vec<f32>, PipelineError> {
        Ok(self
            .decision_function(x)?
            .into_iter()
            .map(sigmoid)
            .collect())
    }

    fn name(&self) -> &str {
        "logistic_regression"
    }
}

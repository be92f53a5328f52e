use ndarray::Array2;

use crate::error::PipelineError;

/// The seam between the pipeline and the learning algorithm.
///
/// The pipeline treats the trainer as opaque: any model that can fit
/// (features, boolean labels) and hand back probabilities satisfies the
/// contract. Implementations must be deterministic for the same examples and
/// must reject empty or single-class training sets.
pub trait ClassifierModel {
    /// Fit the model. `y[i]` is true for spam.
    fn fit(&mut self, x: &Array2<f32>, y: &[bool]) -> Result<(), PipelineError>;

    /// Predict raw margins (pre-sigmoid decision-function values).
    fn decision_function(&self, x: &Array2<f32>) -> Result<Vec<f32>, PipelineError>;

    /// Predict probabilities in `[0, 1]`.
    fn predict_proba(&self, x: &Array2<f32>) -> Result<Vec<f32>, PipelineError>;

    /// Optional human readable name for the model.
    fn name(&self) -> &str {
        "classifier"
    }
}

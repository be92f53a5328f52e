use std::error::Error;
use std::fmt;
use std::path::PathBuf;

/// Errors surfaced by the spam classification pipeline.
///
/// None of these are recoverable inside the pipeline; they all propagate to
/// the caller. Retry semantics (e.g. fetching a missing dataset) belong to
/// whatever put the input file in place, not to this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum PipelineError {
    /// Malformed input row or header; carries a human-readable description
    /// including the 1-based row number where applicable.
    DataFormat(String),
    /// The input file does not exist at fit time.
    DatasetUnavailable(PathBuf),
    /// A featurizer or model was used before `fit`.
    NotFitted,
    /// The trainer was given zero examples.
    EmptyDataset,
    /// All examples share one label, or a metric input is single-class.
    DegenerateLabels,
    /// Fold count outside `[2, num_rows]`.
    InvalidFoldCount { num_folds: usize, num_rows: usize },
    /// Decision threshold outside `[0, 1]`.
    InvalidThreshold(f32),
    /// Model weight dimensionality does not match the featurizer vocabulary.
    InconsistentFeaturizer { expected: usize, actual: usize },
    /// Number of NaN/infinite scores reaching a metric computation.
    NonFiniteScore(usize),
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PipelineError::DataFormat(msg) => write!(f, "Malformed input data: {}", msg),
            PipelineError::DatasetUnavailable(path) => {
                write!(f, "Dataset file not found: {}", path.display())
            }
            PipelineError::NotFitted => {
                write!(f, "Featurizer or model used before it was fit")
            }
            PipelineError::EmptyDataset => write!(f, "Cannot fit on an empty dataset"),
            PipelineError::DegenerateLabels => {
                write!(f, "All examples share one label; nothing to learn")
            }
            PipelineError::InvalidFoldCount {
                num_folds,
                num_rows,
            } => write!(
                f,
                "Fold count {} is invalid for {} rows (need 2 <= folds <= rows)",
                num_folds, num_rows
            ),
            PipelineError::InvalidThreshold(value) => {
                write!(f, "Decision threshold {} is outside [0, 1]", value)
            }
            PipelineError::InconsistentFeaturizer { expected, actual } => write!(
                f,
                "Model expects {} features but featurizer produces {}",
                expected, actual
            ),
            PipelineError::NonFiniteScore(count) => {
                write!(f, "Found {} non-finite values in scores array", count)
            }
        }
    }
}

impl Error for PipelineError {}

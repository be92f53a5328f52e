//! Records, label mapping, and the labeled dataset view.
//!
//! An [`SmsRecord`] is one parsed input row. [`is_spam_label`] is the whole
//! label-mapping story: the upstream corpus marks spam with the literal token
//! `"spam"`, everything else is ham. [`LabeledDataset`] pairs the feature
//! matrix with its boolean targets once featurization has happened.
use ndarray::Array2;

use crate::error::PipelineError;

/// One row of the input corpus, immutable once parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SmsRecord {
    /// Raw label token as it appeared in the file.
    pub label: String,
    /// Free-text message body.
    pub message: String,
}

/// Map a raw label token to the boolean target.
///
/// Exact, case-sensitive match on `"spam"`. `"SPAM"`, `"spam "` and any
/// malformed value all map to ham; the function is total and never fails.
pub fn is_spam_label(label: &str) -> bool {
    label == "spam"
}

/// Feature matrix plus aligned boolean targets.
///
/// Invariant: `x.nrows() == y.len()`, and every row shares the feature
/// dimensionality fixed by the featurizer that produced `x`.
#[derive(Debug, Clone)]
pub struct LabeledDataset {
    pub x: Array2<f32>,
    pub y: Vec<bool>,
}

impl LabeledDataset {
    pub fn new(x: Array2<f32>, y: Vec<bool>) -> Result<Self, PipelineError> {
        if x.nrows() != y.len() {
            return Err(PipelineError::DataFormat(format!(
                "feature matrix has {} rows but {} labels were given",
                x.nrows(),
                y.len()
            )));
        }
        Ok(LabeledDataset { x, y })
    }

    pub fn num_spam(&self) -> usize {
        self.y.iter().filter(|&&v| v).count()
    }

    pub fn num_ham(&self) -> usize {
        self.y.len() - self.num_spam()
    }

    pub fn log_summary(&self) {
        log::info!(
            "Input data: {} spam and {} ham messages, {} feature columns",
            self.num_spam(),
            self.num_ham(),
            self.x.ncols()
        );
    }
}

//! K-fold cross-validation with held-out discipline.
//!
//! Every fold trains a fresh featurizer and a fresh classifier on the rows
//! outside the fold, then scores the fold's held-out rows. Nothing from a
//! held-out fold — rows or vocabulary — reaches the model evaluated on it.
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use rayon::prelude::*;

use crate::config::PipelineConfig;
use crate::data_handling::SmsRecord;
use crate::error::PipelineError;
use crate::featurize::TextFeaturizer;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::logistic::LogisticRegression;
use crate::stats::{mean, roc_auc};

/// Assign each row to a fold in `[0, num_folds)`.
///
/// Stratified: spam and ham indices are shuffled independently with the
/// seeded RNG and dealt round-robin, so folds are disjoint, exhaustive,
/// approximately equal in size, and carry both classes whenever each class
/// has at least `num_folds` members.
pub fn assign_folds(
    labels: &[bool],
    num_folds: usize,
    seed: u64,
) -> Result<Vec<usize>, PipelineError> {
    let n_rows = labels.len();
    if num_folds < 2 || num_folds > n_rows {
        return Err(PipelineError::InvalidFoldCount {
            num_folds,
            num_rows: n_rows,
        });
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let mut spam_indices: Vec<usize> = (0..n_rows).filter(|&i| labels[i]).collect();
    let mut ham_indices: Vec<usize> = (0..n_rows).filter(|&i| !labels[i]).collect();
    spam_indices.shuffle(&mut rng);
    ham_indices.shuffle(&mut rng);

    let mut assignment = vec![0usize; n_rows];
    for (pos, &idx) in spam_indices.iter().chain(ham_indices.iter()).enumerate() {
        assignment[idx] = pos % num_folds;
    }
    Ok(assignment)
}

/// Mean held-out ROC AUC across `config.num_folds` folds.
///
/// Folds run on rayon worker threads; each fold owns its featurizer and
/// trainer, and the per-fold results are combined only after every fold
/// completes (the mean is order-independent).
pub fn cross_validate(
    records: &[SmsRecord],
    labels: &[bool],
    config: &PipelineConfig,
) -> Result<f32, PipelineError> {
    if records.len() != labels.len() {
        return Err(PipelineError::DataFormat(format!(
            "{} records but {} labels were given",
            records.len(),
            labels.len()
        )));
    }
    let assignment = assign_folds(labels, config.num_folds, config.seed)?;

    let fold_aucs: Vec<f32> = (0..config.num_folds)
        .into_par_iter()
        .map(|fold| evaluate_fold(records, labels, &assignment, fold, config))
        .collect::<Result<Vec<f32>, PipelineError>>()?;

    Ok(mean(&fold_aucs))
}

fn evaluate_fold(
    records: &[SmsRecord],
    labels: &[bool],
    assignment: &[usize],
    fold: usize,
    config: &PipelineConfig,
) -> Result<f32, PipelineError> {
    let train_indices: Vec<usize> = (0..records.len())
        .filter(|&i| assignment[i] != fold)
        .collect();
    let heldout_indices: Vec<usize> = (0..records.len())
        .filter(|&i| assignment[i] == fold)
        .collect();

    log::info!(
        "Cross-validation fold {}: {} training rows, {} held-out rows",
        fold,
        train_indices.len(),
        heldout_indices.len()
    );

    let train_messages: Vec<&str> = train_indices
        .iter()
        .map(|&i| records[i].message.as_str())
        .collect();
    let train_labels: Vec<bool> = train_indices.iter().map(|&i| labels[i]).collect();

    // The featurizer is fit on the training split only; held-out vocabulary
    // must not influence this fold's model.
    let mut featurizer = TextFeaturizer::new();
    featurizer.fit(&train_messages)?;
    let x_train = featurizer.transform_batch(&train_messages)?;

    let mut model = LogisticRegression::new(config.trainer.clone());
    model.fit(&x_train, &train_labels)?;

    let heldout_messages: Vec<&str> = heldout_indices
        .iter()
        .map(|&i| records[i].message.as_str())
        .collect();
    let heldout_labels: Vec<bool> = heldout_indices.iter().map(|&i| labels[i]).collect();
    let x_heldout = featurizer.transform_batch(&heldout_messages)?;
    let scores = model.decision_function(&x_heldout)?;

    roc_auc(&scores, &heldout_labels)
}

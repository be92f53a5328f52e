//! The end-to-end fit pipeline.
//!
//! `fit` runs the whole sequence: load records, map labels, cross-validate
//! for the diagnostic AUC, fit the featurizer and trainer on the full corpus,
//! and calibrate the decision threshold. The cross-validation result is
//! reported back to the caller and never influences the final model.
use std::path::Path;

use crate::config::PipelineConfig;
use crate::cross_validation::cross_validate;
use crate::data_handling::{is_spam_label, LabeledDataset};
use crate::error::PipelineError;
use crate::featurize::TextFeaturizer;
use crate::io::SmsSource;
use crate::models::classifier_trait::ClassifierModel;
use crate::models::logistic::LogisticRegression;
use crate::scoring::{calibrate, CalibratedScorer, SpamScorer};

/// What one training run produces: the calibrated model plus the one
/// diagnostic the pipeline reports.
#[derive(Debug)]
pub struct FitReport {
    pub model: CalibratedScorer,
    /// Mean held-out ROC AUC across the configured folds.
    pub mean_cv_auc: f32,
}

/// The fixed pipeline topology: TSV source, label mapper, TF-IDF featurizer,
/// logistic trainer, threshold calibration.
#[derive(Debug, Clone)]
pub struct SpamPipeline {
    config: PipelineConfig,
}

impl SpamPipeline {
    /// Validates the configuration eagerly: a threshold outside `[0, 1]` or a
    /// fold count below 2 is rejected here, before any file or model access.
    pub fn new(config: PipelineConfig) -> Result<Self, PipelineError> {
        config.validate()?;
        Ok(SpamPipeline { config })
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Train on the corpus at `path` and return the calibrated model with its
    /// cross-validated diagnostic.
    pub fn fit<P: AsRef<Path>>(&self, path: P) -> Result<FitReport, PipelineError> {
        let source = SmsSource::new(path);
        let records = source.records()?.collect::<Result<Vec<_>, _>>()?;
        if records.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        let labels: Vec<bool> = records.iter().map(|r| is_spam_label(&r.label)).collect();

        let mean_cv_auc = cross_validate(&records, &labels, &self.config)?;
        log::info!("Mean cross-validated AUC: {:.4}", mean_cv_auc);

        // Final model: featurizer and trainer fit on the full corpus.
        let messages: Vec<&str> = records.iter().map(|r| r.message.as_str()).collect();
        let mut featurizer = TextFeaturizer::new();
        featurizer.fit(&messages)?;
        let x = featurizer.transform_batch(&messages)?;
        let dataset = LabeledDataset::new(x, labels)?;
        dataset.log_summary();

        let mut model = LogisticRegression::new(self.config.trainer.clone());
        model.fit(&dataset.x, &dataset.y)?;

        let scorer = SpamScorer::new(featurizer, model)?;
        let calibrated = calibrate(scorer, self.config.decision_threshold)?;

        Ok(FitReport {
            model: calibrated,
            mean_cv_auc,
        })
    }
}

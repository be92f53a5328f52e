//! spamscreen: an SMS spam classification pipeline.
//!
//! This crate ingests a tab-separated file of labeled SMS messages, turns each
//! message into a TF-IDF feature vector, trains a logistic-regression
//! classifier, reports a cross-validated AUC diagnostic, and calibrates the
//! decision threshold away from the default 0.5 to compensate for class
//! imbalance. The fitted, calibrated model scores single messages.
//!
//! The design favors small, testable modules: data loading and label mapping
//! are kept apart from featurization, the trainer sits behind a trait so the
//! rest of the pipeline treats it as opaque, and calibration wraps a fitted
//! model without retraining it.
pub mod config;
pub mod cross_validation;
pub mod data_handling;
pub mod error;
pub mod featurize;
pub mod io;
pub mod models;
pub mod pipeline;
pub mod scoring;
pub mod stats;

//! Integration tests for the TF-IDF featurizer.

use spamscreen::error::PipelineError;
use spamscreen::featurize::TextFeaturizer;

fn fitted_featurizer() -> TextFeaturizer {
    let corpus = [
        "win a free prize now",
        "free cash prize winner",
        "see you at lunch",
        "meet me tomorrow at lunch",
    ];
    let mut featurizer = TextFeaturizer::new();
    featurizer.fit(&corpus).unwrap();
    featurizer
}

// ---------------------------------------------------------------------------
// Fit / transform discipline
// ---------------------------------------------------------------------------

#[test]
fn dimension_is_fixed_after_fit() {
    let featurizer = fitted_featurizer();
    let dim = featurizer.dimension().unwrap();
    assert!(dim > 0);

    for message in ["free lunch", "", "completely unseen words here"] {
        assert_eq!(featurizer.transform(message).unwrap().len(), dim);
    }
}

#[test]
fn transform_is_idempotent() {
    let featurizer = fitted_featurizer();
    let a = featurizer.transform("win a free lunch tomorrow").unwrap();
    let b = featurizer.transform("win a free lunch tomorrow").unwrap();
    assert_eq!(a, b);
}

#[test]
fn refit_on_same_corpus_is_deterministic() {
    let a = fitted_featurizer();
    let b = fitted_featurizer();
    let message = "free prize at lunch";
    assert_eq!(
        a.transform(message).unwrap(),
        b.transform(message).unwrap()
    );
}

#[test]
fn unknown_tokens_produce_zero_vector() {
    let featurizer = fitted_featurizer();
    let vector = featurizer.transform("xyzzy plugh qwerty").unwrap();
    assert!(vector.iter().all(|&v| v == 0.0));
}

#[test]
fn known_tokens_produce_positive_weight() {
    let featurizer = fitted_featurizer();
    let vector = featurizer.transform("free free free").unwrap();
    let non_zero = vector.iter().filter(|&&v| v > 0.0).count();
    assert_eq!(non_zero, 1, "only the 'free' position should be set");
}

#[test]
fn batch_matrix_matches_single_transforms() {
    let featurizer = fitted_featurizer();
    let messages = ["free prize", "lunch tomorrow"];
    let matrix = featurizer.transform_batch(&messages).unwrap();
    assert_eq!(matrix.nrows(), 2);
    assert_eq!(matrix.ncols(), featurizer.dimension().unwrap());

    for (row, message) in messages.iter().enumerate() {
        let single = featurizer.transform(message).unwrap();
        let from_matrix: Vec<f32> = matrix.row(row).to_vec();
        assert_eq!(single, from_matrix);
    }
}

// ---------------------------------------------------------------------------
// Error cases
// ---------------------------------------------------------------------------

#[test]
fn transform_before_fit_is_not_fitted() {
    let featurizer = TextFeaturizer::new();
    assert_eq!(
        featurizer.transform("anything").unwrap_err(),
        PipelineError::NotFitted
    );
    assert_eq!(
        featurizer.dimension().unwrap_err(),
        PipelineError::NotFitted
    );
}

#[test]
fn fit_on_empty_corpus_is_empty_dataset() {
    let mut featurizer = TextFeaturizer::new();
    let corpus: Vec<&str> = vec![];
    assert_eq!(
        featurizer.fit(&corpus).unwrap_err(),
        PipelineError::EmptyDataset
    );
}

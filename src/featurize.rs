//! TF-IDF text featurization.
//!
//! [`TextFeaturizer`] follows the usual fit/transform split: `fit` learns the
//! vocabulary and per-term inverse document frequencies from the training
//! corpus and freezes the feature dimensionality; `transform` maps any later
//! message into that fixed space. Terms never seen during `fit` are ignored,
//! so held-out and live messages always produce vectors of the same length.
use std::collections::{HashMap, HashSet};

use ndarray::Array2;

use crate::error::PipelineError;

/// Lowercase and split on non-alphanumeric characters.
pub fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

/// TF-IDF vectorizer with a frozen, fit-time vocabulary.
#[derive(Debug, Clone)]
pub struct TextFeaturizer {
    /// Term -> vector position, assigned in first-encounter order.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per vocabulary position.
    idf: Vec<f32>,
    /// Number of documents seen during fit; zero means not fitted.
    n_documents: usize,
}

impl TextFeaturizer {
    pub fn new() -> Self {
        TextFeaturizer {
            vocabulary: HashMap::new(),
            idf: Vec::new(),
            n_documents: 0,
        }
    }

    /// Learn the vocabulary and IDF weights from the training corpus.
    ///
    /// Vocabulary positions are assigned in the order terms are first
    /// encountered, so the same corpus always yields the same layout.
    pub fn fit<S: AsRef<str>>(&mut self, messages: &[S]) -> Result<(), PipelineError> {
        if messages.is_empty() {
            return Err(PipelineError::EmptyDataset);
        }

        let mut vocabulary: HashMap<String, usize> = HashMap::new();
        let mut document_frequency: HashMap<String, usize> = HashMap::new();

        for message in messages {
            let mut seen_in_doc: HashSet<String> = HashSet::new();
            for token in tokenize(message.as_ref()) {
                if !vocabulary.contains_key(&token) {
                    let idx = vocabulary.len();
                    vocabulary.insert(token.clone(), idx);
                }
                seen_in_doc.insert(token);
            }
            for token in seen_in_doc {
                *document_frequency.entry(token).or_insert(0) += 1;
            }
        }

        // Smoothed IDF: ln((N + 1) / (df + 1)) + 1
        let n = messages.len() as f32;
        let mut idf = vec![0.0f32; vocabulary.len()];
        for (term, &idx) in &vocabulary {
            let df = *document_frequency.get(term).unwrap_or(&0) as f32;
            idf[idx] = ((n + 1.0) / (df + 1.0)).ln() + 1.0;
        }

        self.vocabulary = vocabulary;
        self.idf = idf;
        self.n_documents = messages.len();
        Ok(())
    }

    /// Map one message into the fitted feature space.
    pub fn transform(&self, message: &str) -> Result<Vec<f32>, PipelineError> {
        if self.n_documents == 0 {
            return Err(PipelineError::NotFitted);
        }

        let tokens = tokenize(message);
        let mut tf = vec![0.0f32; self.vocabulary.len()];
        for token in &tokens {
            if let Some(&idx) = self.vocabulary.get(token) {
                tf[idx] += 1.0;
            }
        }

        let doc_length = tokens.len() as f32;
        if doc_length > 0.0 {
            for value in tf.iter_mut() {
                *value /= doc_length;
            }
        }

        for (idx, value) in tf.iter_mut().enumerate() {
            *value *= self.idf[idx];
        }

        Ok(tf)
    }

    /// Transform a batch of messages into a feature matrix, one row each.
    pub fn transform_batch<S: AsRef<str>>(
        &self,
        messages: &[S],
    ) -> Result<Array2<f32>, PipelineError> {
        let dim = self.dimension()?;
        let mut flat = Vec::with_capacity(messages.len() * dim);
        for message in messages {
            flat.extend(self.transform(message.as_ref())?);
        }
        Array2::from_shape_vec((messages.len(), dim), flat).map_err(|e| {
            PipelineError::DataFormat(format!("failed to build feature matrix: {}", e))
        })
    }

    /// Fixed feature dimensionality, available once fitted.
    pub fn dimension(&self) -> Result<usize, PipelineError> {
        if self.n_documents == 0 {
            return Err(PipelineError::NotFitted);
        }
        Ok(self.vocabulary.len())
    }

    pub fn is_fitted(&self) -> bool {
        self.n_documents > 0
    }

    /// Whether a term made it into the fitted vocabulary.
    pub fn contains_term(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }
}

impl Default for TextFeaturizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tokenize_lowercases_and_splits() {
        let tokens = tokenize("Free medicine winner! Congratulations");
        assert_eq!(tokens, vec!["free", "medicine", "winner", "congratulations"]);
    }

    #[test]
    fn tokenize_drops_punctuation_runs() {
        let tokens = tokenize("That's a great idea. It should work.");
        assert_eq!(
            tokens,
            vec!["that", "s", "a", "great", "idea", "it", "should", "work"]
        );
    }

    #[test]
    fn transform_before_fit_fails() {
        let featurizer = TextFeaturizer::new();
        assert_eq!(
            featurizer.transform("hello").unwrap_err(),
            PipelineError::NotFitted
        );
    }

    #[test]
    fn fit_then_transform_has_fixed_dimension() {
        let corpus = ["free prize now", "see you at lunch"];
        let mut featurizer = TextFeaturizer::new();
        featurizer.fit(&corpus).unwrap();
        let dim = featurizer.dimension().unwrap();
        assert_eq!(dim, 7);
        assert_eq!(featurizer.transform("free lunch").unwrap().len(), dim);
        assert_eq!(featurizer.transform("totally unseen words").unwrap().len(), dim);
    }
}

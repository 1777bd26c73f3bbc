//! TF-IDF vectorizer over a fixed document collection.

use std::collections::{BTreeMap, BTreeSet};

use nalgebra::DMatrix;

use crate::tokenizer::tokenize;

/// L2-normalized TF-IDF weights: documents × vocabulary terms.
#[derive(Debug, Clone)]
pub struct TfIdfMatrix {
    weights: DMatrix<f64>,
}

impl TfIdfMatrix {
    pub fn n_documents(&self) -> usize {
        self.weights.nrows()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.weights.ncols()
    }

    pub fn weights(&self) -> &DMatrix<f64> {
        &self.weights
    }

    /// Dot product of two rows. Rows are unit length (or zero), so this is
    /// their cosine similarity.
    pub fn dot(&self, a: usize, b: usize) -> f64 {
        self.weights.row(a).dot(&self.weights.row(b))
    }
}

/// Raw term counts weighted by smoothed idf, `ln((1 + n) / (1 + df)) + 1`,
/// then L2-normalized per document.
#[derive(Debug, Clone)]
pub struct TfIdfVectorizer {
    remove_stop_words: bool,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfIdfVectorizer {
    pub fn new(remove_stop_words: bool) -> Self {
        Self {
            remove_stop_words,
            vocabulary: BTreeMap::new(),
            idf: Vec::new(),
        }
    }

    pub fn vocabulary(&self) -> &BTreeMap<String, usize> {
        &self.vocabulary
    }

    pub fn idf(&self) -> &[f64] {
        &self.idf
    }

    /// Learn the vocabulary and idf weights, then vectorize the same documents.
    pub fn fit_transform<S: AsRef<str>>(&mut self, documents: &[S]) -> TfIdfMatrix {
        let tokenized: Vec<Vec<String>> = documents
            .iter()
            .map(|d| tokenize(d.as_ref(), self.remove_stop_words))
            .collect();

        let terms: BTreeSet<&str> = tokenized.iter().flatten().map(String::as_str).collect();
        self.vocabulary = terms
            .into_iter()
            .enumerate()
            .map(|(i, t)| (t.to_string(), i))
            .collect();

        let mut df = vec![0usize; self.vocabulary.len()];
        for tokens in &tokenized {
            let distinct: BTreeSet<usize> = tokens.iter().map(|t| self.vocabulary[t]).collect();
            for idx in distinct {
                df[idx] += 1;
            }
        }
        let n = documents.len() as f64;
        self.idf = df
            .iter()
            .map(|&d| ((1.0 + n) / (1.0 + d as f64)).ln() + 1.0)
            .collect();

        let mut weights = DMatrix::<f64>::zeros(tokenized.len(), self.vocabulary.len());
        for (doc, tokens) in tokenized.iter().enumerate() {
            for t in tokens {
                if let Some(&idx) = self.vocabulary.get(t) {
                    weights[(doc, idx)] += 1.0;
                }
            }
        }
        for (idx, mut column) in weights.column_iter_mut().enumerate() {
            column *= self.idf[idx];
        }
        for mut row in weights.row_iter_mut() {
            let norm = row.norm();
            if norm > f64::EPSILON {
                row.unscale_mut(norm);
            }
        }
        TfIdfMatrix { weights }
    }
}

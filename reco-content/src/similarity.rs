//! Dense pairwise article similarity.

use nalgebra::DMatrix;

use crate::vectorizer::TfIdfMatrix;

/// Square cosine-similarity matrix indexed by document row position.
#[derive(Debug, Clone)]
pub struct SimilarityMatrix {
    values: DMatrix<f64>,
}

impl SimilarityMatrix {
    /// Linear kernel `X · Xᵀ` of the (unit-length) TF-IDF rows.
    pub fn from_tfidf(tfidf: &TfIdfMatrix) -> Self {
        let x = tfidf.weights();
        Self {
            values: x * x.transpose(),
        }
    }

    pub fn len(&self) -> usize {
        self.values.nrows()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[(i, j)]
    }

    pub fn values(&self) -> &DMatrix<f64> {
        &self.values
    }

    /// The `k` rows most similar to `i`, excluding `i` itself. Similarity
    /// descending, ties by row index ascending.
    pub fn most_similar(&self, i: usize, k: usize) -> Vec<usize> {
        let row = self.values.row(i);
        let mut idx: Vec<usize> = (0..self.len()).filter(|&j| j != i).collect();
        idx.sort_by(|&a, &b| row[b].total_cmp(&row[a]).then(a.cmp(&b)));
        idx.truncate(k);
        idx
    }
}

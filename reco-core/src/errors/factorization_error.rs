//! Latent factor evaluation errors.

use super::error_code::{self, RecoErrorCode};

/// Errors raised by the SVD accuracy sweep.
#[derive(Debug, thiserror::Error)]
pub enum FactorizationError {
    #[error("train matrix is empty: {users} users x {articles} articles")]
    EmptyTrainMatrix { users: usize, articles: usize },

    #[error("no test users or articles overlap the train matrix ({test_users} test users, {test_articles} test articles)")]
    EmptyEvaluationSet {
        test_users: usize,
        test_articles: usize,
    },

    #[error("singular value decomposition failed: {reason}")]
    DecompositionFailed { reason: String },
}

impl RecoErrorCode for FactorizationError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmptyTrainMatrix { .. } => error_code::EMPTY_TRAIN_MATRIX,
            Self::EmptyEvaluationSet { .. } => error_code::EMPTY_EVALUATION_SET,
            Self::DecompositionFailed { .. } => error_code::DECOMPOSITION_FAILED,
        }
    }
}

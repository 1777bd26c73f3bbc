//! # reco-factor
//!
//! Latent-factor evaluation: a positional train/test split of the
//! interaction table, an economy SVD of the train matrix, and an accuracy
//! sweep over truncated reconstructions.

pub mod decomposition;
pub mod evaluator;
pub mod split;

pub use decomposition::Decomposition;
pub use evaluator::{EvaluationSet, LatentFactorEvaluator};
pub use split::TrainTestSplit;

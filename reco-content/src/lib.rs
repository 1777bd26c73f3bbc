//! # reco-content
//!
//! Content-based recommendations: TF-IDF vectors over article descriptions,
//! a pairwise cosine-similarity matrix, and recommendations of articles
//! similar to ones a user already read.

pub mod engine;
pub mod similarity;
pub mod stopwords;
pub mod tokenizer;
pub mod vectorizer;

pub use engine::ContentEngine;
pub use similarity::SimilarityMatrix;
pub use vectorizer::{TfIdfMatrix, TfIdfVectorizer};

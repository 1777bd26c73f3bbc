//! # reco-popularity
//!
//! Rank-based recommendations. There are no ratings, only interactions, so
//! an article's popularity is how often it was interacted with.

pub mod ranker;

pub use ranker::{PopularArticle, PopularityRanker};

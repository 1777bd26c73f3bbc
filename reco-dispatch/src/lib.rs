//! # reco-dispatch
//!
//! The recommender entry point. Builds every strategy once from the clean
//! tables, classifies each user by history, and routes the request:
//! unknown users get popular articles, users with a short history get
//! content-similar articles (falling back to popular ones when none are
//! found), everyone else gets collaborative recommendations.

pub mod recommender;
pub mod snapshot;

pub use recommender::Recommender;
pub use snapshot::SharedRecommender;

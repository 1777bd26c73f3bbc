//! # reco-core
//!
//! Foundation crate for the article recommender.
//! Defines all shared types, traits, errors, config, and constants, plus the
//! ingestion boundary that turns raw rows into the two clean tables.
//! Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod ingest;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::RecoConfig;
pub use errors::{RecoError, RecoResult};
pub use ingest::CleanTables;
pub use models::{
    AccuracyCurve, Article, ArticleId, Interaction, Neighbor, RecommendationOutcome,
    Recommendations, RecommendedArticle, Strategy, UserId, UserSegment,
};

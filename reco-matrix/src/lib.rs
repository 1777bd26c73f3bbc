//! # reco-matrix
//!
//! Users × articles interaction-count matrix built from deduplicated
//! interaction records, plus the article-title lookup shared by the
//! recommendation strategies.

pub mod dedup;
pub mod titles;
pub mod user_item;

pub use dedup::dedup_interactions;
pub use titles::TitleIndex;
pub use user_item::UserItemMatrix;

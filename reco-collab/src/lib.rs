//! # reco-collab
//!
//! User-based collaborative filtering: rank other users by shared articles,
//! then recommend what the closest neighbors read that the user has not.

pub mod filter;

pub use filter::{CollaborativeFilter, UserArticles};

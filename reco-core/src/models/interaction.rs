use serde::{Deserialize, Serialize};

use super::ArticleId;

/// Numeric user identifier assigned at ingestion.
pub type UserId = u64;

/// One cleaned user-article interaction row.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Interaction {
    pub user_id: UserId,
    pub article_id: ArticleId,
    pub title: String,
}

impl Interaction {
    pub fn new(user_id: UserId, article_id: impl Into<ArticleId>, title: impl Into<String>) -> Self {
        Self {
            user_id,
            article_id: article_id.into(),
            title: title.into(),
        }
    }
}

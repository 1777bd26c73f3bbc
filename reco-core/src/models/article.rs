use serde::{Deserialize, Serialize};

use super::ArticleId;

/// One cleaned article metadata row. Missing text is normalized to "".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Article {
    pub article_id: ArticleId,
    pub title: String,
    pub description: String,
}

impl Article {
    pub fn new(
        article_id: impl Into<ArticleId>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            article_id: article_id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

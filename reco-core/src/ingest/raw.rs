use serde::{Deserialize, Serialize};

use crate::models::{RawArticleId, UserId};

/// An interaction row as parsed by the loading collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawInteraction {
    pub article_id: RawArticleId,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    /// Already-encoded user id; takes precedence over `email`.
    #[serde(default)]
    pub user_id: Option<UserId>,
}

/// An article metadata row as parsed by the loading collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawArticle {
    pub article_id: RawArticleId,
    #[serde(default)]
    pub doc_full_name: Option<String>,
    #[serde(default)]
    pub doc_description: Option<String>,
}

use serde::{Deserialize, Serialize};

use super::{ArticleId, UserId};
use crate::constants::CONTENT_NOT_APPLICABLE_MESSAGE;

/// A single recommended article. Every strategy returns both the id and the
/// title so the presentation layer can pick one representation consistently.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecommendedArticle {
    pub article_id: ArticleId,
    pub title: String,
}

impl RecommendedArticle {
    pub fn new(article_id: ArticleId, title: impl Into<String>) -> Self {
        Self {
            article_id,
            title: title.into(),
        }
    }
}

/// Result of asking one strategy for recommendations.
///
/// `Empty` ("computed, nothing found") and `NotApplicable` ("this strategy
/// cannot serve this user") are distinct: the dispatcher falls back only on
/// `Empty`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "items", rename_all = "snake_case")]
pub enum RecommendationOutcome {
    Found(Vec<RecommendedArticle>),
    Empty,
    NotApplicable,
}

impl RecommendationOutcome {
    /// `Found` for a non-empty list, `Empty` otherwise.
    pub fn from_items(items: Vec<RecommendedArticle>) -> Self {
        if items.is_empty() {
            Self::Empty
        } else {
            Self::Found(items)
        }
    }

    pub fn items(&self) -> &[RecommendedArticle] {
        match self {
            Self::Found(items) => items,
            Self::Empty | Self::NotApplicable => &[],
        }
    }

    pub fn into_items(self) -> Vec<RecommendedArticle> {
        match self {
            Self::Found(items) => items,
            Self::Empty | Self::NotApplicable => Vec::new(),
        }
    }

    pub fn len(&self) -> usize {
        self.items().len()
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }

    pub fn is_not_applicable(&self) -> bool {
        matches!(self, Self::NotApplicable)
    }

    pub fn article_ids(&self) -> Vec<ArticleId> {
        self.items().iter().map(|r| r.article_id.clone()).collect()
    }

    pub fn titles(&self) -> Vec<String> {
        self.items().iter().map(|r| r.title.clone()).collect()
    }

    /// User-facing message for the not-applicable case.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            Self::NotApplicable => Some(CONTENT_NOT_APPLICABLE_MESSAGE),
            _ => None,
        }
    }
}

/// The recommendation strategy that produced a result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Strategy {
    Popularity,
    Collaborative,
    Content,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Self::Popularity => "popularity",
            Self::Collaborative => "collaborative",
            Self::Content => "content",
        }
    }
}

/// Dispatcher classification of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserSegment {
    /// No interaction history at all.
    Unknown,
    /// Fewer interactions than the sparse-history threshold.
    SparseHistory,
    Established,
}

/// Dispatcher output for one user.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendations {
    pub user_id: UserId,
    pub segment: UserSegment,
    /// Strategy whose output is in `outcome`.
    pub strategy: Strategy,
    /// True when the segment's primary strategy came back empty and popularity filled in.
    pub fell_back: bool,
    pub outcome: RecommendationOutcome,
}

impl Recommendations {
    pub fn items(&self) -> &[RecommendedArticle] {
        self.outcome.items()
    }

    pub fn article_ids(&self) -> Vec<ArticleId> {
        self.outcome.article_ids()
    }

    pub fn titles(&self) -> Vec<String> {
        self.outcome.titles()
    }
}

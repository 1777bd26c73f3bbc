//! Article id → title lookup.

use std::collections::HashMap;

use reco_core::models::{Article, ArticleId, Interaction, RecommendedArticle};

/// Maps article ids to display titles.
///
/// The first title seen in the interaction table wins; articles only known
/// from metadata fall back to their metadata title.
#[derive(Debug, Clone, Default)]
pub struct TitleIndex {
    titles: HashMap<ArticleId, String>,
}

impl TitleIndex {
    pub fn build(interactions: &[Interaction], articles: &[Article]) -> Self {
        let mut titles: HashMap<ArticleId, String> = HashMap::new();
        for i in interactions {
            titles
                .entry(i.article_id.clone())
                .or_insert_with(|| i.title.clone());
        }
        for a in articles {
            titles
                .entry(a.article_id.clone())
                .or_insert_with(|| a.title.clone());
        }
        Self { titles }
    }

    pub fn title(&self, article_id: &ArticleId) -> Option<&str> {
        self.titles.get(article_id).map(String::as_str)
    }

    /// Titles for `article_ids` in the given order; unknown ids are skipped.
    pub fn get_article_names(&self, article_ids: &[ArticleId]) -> Vec<String> {
        article_ids
            .iter()
            .filter_map(|id| self.title(id).map(str::to_string))
            .collect()
    }

    /// Pair each known id with its title, preserving order.
    pub fn to_recommended(&self, article_ids: &[ArticleId]) -> Vec<RecommendedArticle> {
        article_ids
            .iter()
            .filter_map(|id| {
                self.title(id)
                    .map(|t| RecommendedArticle::new(id.clone(), t))
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}

use std::collections::HashMap;

use reco_core::config::PopularityConfig;
use reco_core::models::{ArticleId, Interaction, RecommendationOutcome, RecommendedArticle, Strategy, UserId};
use reco_core::traits::IRecommender;
use tracing::debug;

/// One row of the popularity ranking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopularArticle {
    pub article_id: ArticleId,
    pub title: String,
    pub interactions: u64,
}

/// Ranks `(article_id, title)` pairs by total interaction count, descending.
///
/// The ranking is computed once at construction. Ties keep first-encounter
/// order of the pair in the input; callers should treat tie order as
/// unspecified. Counts are passed per call and never change the configured
/// default.
#[derive(Debug, Clone)]
pub struct PopularityRanker {
    ranking: Vec<PopularArticle>,
    config: PopularityConfig,
}

impl PopularityRanker {
    pub fn new(interactions: &[Interaction], config: PopularityConfig) -> Self {
        let mut order: Vec<(&ArticleId, &str)> = Vec::new();
        let mut counts: HashMap<(&ArticleId, &str), u64> = HashMap::new();
        for i in interactions {
            let key = (&i.article_id, i.title.as_str());
            let count = counts.entry(key).or_insert_with(|| {
                order.push(key);
                0
            });
            *count += 1;
        }

        let mut ranking: Vec<PopularArticle> = order
            .into_iter()
            .map(|key| PopularArticle {
                article_id: key.0.clone(),
                title: key.1.to_string(),
                interactions: counts[&key],
            })
            .collect();
        // Stable: ties stay in encounter order.
        ranking.sort_by(|a, b| b.interactions.cmp(&a.interactions));

        debug!(articles = ranking.len(), "built popularity ranking");
        Self { ranking, config }
    }

    pub fn default_top_n(&self) -> usize {
        self.config.default_top_n
    }

    /// The `n` most popular ranking rows.
    pub fn top(&self, n: usize) -> &[PopularArticle] {
        &self.ranking[..n.min(self.ranking.len())]
    }

    /// Titles of the `n` most interacted-with articles.
    pub fn top_articles(&self, n: usize) -> Vec<String> {
        self.top(n).iter().map(|p| p.title.clone()).collect()
    }

    /// Ids of the `n` most interacted-with articles.
    pub fn top_article_ids(&self, n: usize) -> Vec<ArticleId> {
        self.top(n).iter().map(|p| p.article_id.clone()).collect()
    }

    /// The `n` most popular articles as recommendation items.
    pub fn top_recommended(&self, n: usize) -> Vec<RecommendedArticle> {
        self.top(n)
            .iter()
            .map(|p| RecommendedArticle::new(p.article_id.clone(), p.title.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.ranking.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ranking.is_empty()
    }
}

impl IRecommender for PopularityRanker {
    /// Popularity ignores the user.
    fn recommend(&self, _user_id: UserId, top_n: usize) -> RecommendationOutcome {
        RecommendationOutcome::from_items(self.top_recommended(top_n))
    }

    fn strategy(&self) -> Strategy {
        Strategy::Popularity
    }
}

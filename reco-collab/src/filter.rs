//! User-based collaborative filtering over the user-item matrix.

use std::collections::HashSet;
use std::sync::Arc;

use reco_core::config::CollaborativeConfig;
use reco_core::models::{
    ArticleId, Neighbor, RecommendationOutcome, RecommendedArticle, Strategy, UserId,
};
use reco_core::traits::IRecommender;
use reco_matrix::{TitleIndex, UserItemMatrix};
use tracing::debug;

/// Ids and titles of the articles a user has seen, in parallel order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserArticles {
    pub article_ids: Vec<ArticleId>,
    pub titles: Vec<String>,
}

/// User-based collaborative filter.
///
/// Similarity between two users is the plain dot product of their matrix
/// rows, i.e. the count of shared articles. It is not normalized, so users
/// with long histories score higher.
#[derive(Debug, Clone)]
pub struct CollaborativeFilter {
    matrix: Arc<UserItemMatrix>,
    titles: Arc<TitleIndex>,
    /// Global interaction count per article, in column order.
    article_popularity: Vec<u64>,
    /// Total interactions per user, in row order.
    user_totals: Vec<u64>,
    config: CollaborativeConfig,
}

impl CollaborativeFilter {
    pub fn new(
        matrix: Arc<UserItemMatrix>,
        titles: Arc<TitleIndex>,
        config: CollaborativeConfig,
    ) -> Self {
        let article_popularity = matrix.column_sums();
        let user_totals = matrix.row_sums();
        Self {
            matrix,
            titles,
            article_popularity,
            user_totals,
            config,
        }
    }

    pub fn matrix(&self) -> &UserItemMatrix {
        &self.matrix
    }

    pub fn default_top_n(&self) -> usize {
        self.config.default_top_n
    }

    /// `(user_id, similarity)` for every row, the user's own row included,
    /// in row order. `None` if the user has no row.
    pub fn user_similarities(&self, user_id: UserId) -> Option<Vec<(UserId, u64)>> {
        let target = self.matrix.user_index(user_id)?;
        Some(
            self.matrix
                .users()
                .iter()
                .copied()
                .zip(self.matrix.row_products(target))
                .collect(),
        )
    }

    /// Other users ordered from most to least similar.
    ///
    /// Ties keep row order; no secondary key is applied.
    pub fn find_similar_users(&self, user_id: UserId) -> Option<Vec<UserId>> {
        let mut sims = self.user_similarities(user_id)?;
        sims.sort_by(|a, b| b.1.cmp(&a.1));
        Some(
            sims.into_iter()
                .filter(|(other, _)| *other != user_id)
                .map(|(other, _)| other)
                .collect(),
        )
    }

    /// Neighbor ranking: similarity descending, then the neighbor's total
    /// interaction count descending. The user itself is excluded.
    pub fn get_top_sorted_users(&self, user_id: UserId) -> Option<Vec<Neighbor>> {
        let sims = self.user_similarities(user_id)?;
        let mut neighbors: Vec<Neighbor> = sims
            .into_iter()
            .enumerate()
            .filter(|(_, (other, _))| *other != user_id)
            .map(|(row, (other, similarity))| Neighbor {
                neighbor_id: other,
                similarity,
                num_interactions: self.user_totals[row],
            })
            .collect();
        neighbors.sort_by(|a, b| {
            b.similarity
                .cmp(&a.similarity)
                .then_with(|| b.num_interactions.cmp(&a.num_interactions))
        });
        Some(neighbors)
    }

    /// Articles the user has seen (count ≥ 1) with their titles.
    pub fn get_user_articles(&self, user_id: UserId) -> Option<UserArticles> {
        let article_ids = self.matrix.seen_articles(user_id)?;
        let titles = article_ids
            .iter()
            .map(|id| self.titles.title(id).unwrap_or_default().to_string())
            .collect();
        Some(UserArticles {
            article_ids,
            titles,
        })
    }

    /// Titles for a list of article ids, in the given order.
    pub fn get_article_names(&self, article_ids: &[ArticleId]) -> Vec<String> {
        self.titles.get_article_names(article_ids)
    }

    /// Order `article_ids` by global interaction count, descending. Ties keep
    /// column order. Ids without a matrix column are dropped.
    pub fn get_top_sorted_articles(&self, article_ids: &[ArticleId]) -> Vec<RecommendedArticle> {
        let mut cols: Vec<usize> = article_ids
            .iter()
            .filter_map(|id| self.matrix.article_index(id))
            .collect();
        cols.sort_unstable();
        cols.dedup();
        cols.sort_by(|&a, &b| self.article_popularity[b].cmp(&self.article_popularity[a]));

        let articles = self.matrix.articles();
        cols.into_iter()
            .map(|c| {
                let id = articles[c].clone();
                let title = self.titles.title(&id).unwrap_or_default().to_string();
                RecommendedArticle::new(id, title)
            })
            .collect()
    }

    /// Basic recommender.
    ///
    /// Walks neighbors in `find_similar_users` order and appends each
    /// neighbor's unseen articles (column order). Stops once the list is
    /// longer than `top_n`, then truncates to `top_n`. Articles contributed
    /// by several neighbors may repeat.
    pub fn user_recs(&self, user_id: UserId, top_n: usize) -> Option<Vec<ArticleId>> {
        let neighbors = self.find_similar_users(user_id)?;
        let seen: HashSet<ArticleId> = self.matrix.seen_articles(user_id)?.into_iter().collect();

        let mut recs: Vec<ArticleId> = Vec::new();
        for neighbor in neighbors {
            let Some(theirs) = self.matrix.seen_articles(neighbor) else {
                continue;
            };
            recs.extend(theirs.into_iter().filter(|a| !seen.contains(a)));
            if recs.len() > top_n {
                break;
            }
        }
        recs.truncate(top_n);
        Some(recs)
    }

    /// Preferred recommender.
    ///
    /// Walks neighbors in `get_top_sorted_users` order. Each neighbor
    /// contributes the articles neither the user nor an earlier neighbor
    /// supplied, ordered by global interaction count. Same stopping rule as
    /// [`Self::user_recs`].
    pub fn user_advance_recs(&self, user_id: UserId, top_n: usize) -> Option<Vec<RecommendedArticle>> {
        let neighbors = self.get_top_sorted_users(user_id)?;
        let mut excluded: HashSet<ArticleId> =
            self.matrix.seen_articles(user_id)?.into_iter().collect();

        let mut recs: Vec<RecommendedArticle> = Vec::new();
        for neighbor in neighbors {
            let Some(theirs) = self.matrix.seen_articles(neighbor.neighbor_id) else {
                continue;
            };
            let fresh: Vec<ArticleId> = theirs
                .into_iter()
                .filter(|a| !excluded.contains(a))
                .collect();
            if !fresh.is_empty() {
                let sorted = self.get_top_sorted_articles(&fresh);
                excluded.extend(sorted.iter().map(|r| r.article_id.clone()));
                recs.extend(sorted);
            }
            if recs.len() > top_n {
                break;
            }
        }
        recs.truncate(top_n);

        debug!(user_id, top_n, recs = recs.len(), "collaborative recommendations");
        Some(recs)
    }
}

impl IRecommender for CollaborativeFilter {
    fn recommend(&self, user_id: UserId, top_n: usize) -> RecommendationOutcome {
        match self.user_advance_recs(user_id, top_n) {
            Some(items) => RecommendationOutcome::from_items(items),
            None => RecommendationOutcome::NotApplicable,
        }
    }

    fn strategy(&self) -> Strategy {
        Strategy::Collaborative
    }
}

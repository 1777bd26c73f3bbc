//! Dense users × articles interaction-count matrix.

use std::collections::{BTreeMap, BTreeSet, HashMap};

use nalgebra::DMatrix;
use reco_core::models::{ArticleId, Interaction, UserId};
use tracing::debug;

use crate::dedup::dedup_interactions;

/// Users × articles matrix of interaction counts.
///
/// Rows are the distinct user ids of the input in ascending order, columns
/// the distinct article ids in ascending (numeric-aware) order. A cell holds
/// the number of distinct post-dedup rows for that (user, article) pair, so
/// it is usually 1, and more only when the same pair appears with different
/// titles. Users or articles absent from the input have no row/column at
/// all. The matrix is immutable once built.
#[derive(Debug, Clone)]
pub struct UserItemMatrix {
    users: Vec<UserId>,
    articles: Vec<ArticleId>,
    user_index: HashMap<UserId, usize>,
    article_index: HashMap<ArticleId, usize>,
    cells: DMatrix<u32>,
}

impl Default for UserItemMatrix {
    fn default() -> Self {
        Self {
            users: Vec::new(),
            articles: Vec::new(),
            user_index: HashMap::new(),
            article_index: HashMap::new(),
            cells: DMatrix::zeros(0, 0),
        }
    }
}

impl UserItemMatrix {
    /// Deduplicate `interactions`, then group by (user, article) and count.
    pub fn build(interactions: &[Interaction]) -> Self {
        let unique = dedup_interactions(interactions);

        let mut counts: BTreeMap<(UserId, &ArticleId), u32> = BTreeMap::new();
        let mut articles: BTreeSet<&ArticleId> = BTreeSet::new();
        for row in &unique {
            *counts.entry((row.user_id, &row.article_id)).or_default() += 1;
            articles.insert(&row.article_id);
        }

        let users: Vec<UserId> = {
            let mut u: Vec<UserId> = counts.keys().map(|(user, _)| *user).collect();
            u.dedup();
            u
        };
        let articles: Vec<ArticleId> = articles.into_iter().cloned().collect();

        let user_index: HashMap<UserId, usize> =
            users.iter().enumerate().map(|(i, u)| (*u, i)).collect();
        let article_index: HashMap<ArticleId, usize> = articles
            .iter()
            .enumerate()
            .map(|(i, a)| (a.clone(), i))
            .collect();

        let mut cells = DMatrix::<u32>::zeros(users.len(), articles.len());
        for ((user, article), count) in counts {
            cells[(user_index[&user], article_index[article])] = count;
        }

        debug!(
            input_rows = interactions.len(),
            unique_rows = unique.len(),
            users = users.len(),
            articles = articles.len(),
            "built user-item matrix"
        );

        Self {
            users,
            articles,
            user_index,
            article_index,
            cells,
        }
    }

    pub fn n_users(&self) -> usize {
        self.users.len()
    }

    pub fn n_articles(&self) -> usize {
        self.articles.len()
    }

    /// `(rows, columns)`.
    pub fn shape(&self) -> (usize, usize) {
        self.cells.shape()
    }

    /// Total number of cells, zeros included.
    pub fn size(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Row labels in row order.
    pub fn users(&self) -> &[UserId] {
        &self.users
    }

    /// Column labels in column order.
    pub fn articles(&self) -> &[ArticleId] {
        &self.articles
    }

    pub fn user_index(&self, user_id: UserId) -> Option<usize> {
        self.user_index.get(&user_id).copied()
    }

    pub fn article_index(&self, article_id: &ArticleId) -> Option<usize> {
        self.article_index.get(article_id).copied()
    }

    pub fn contains_user(&self, user_id: UserId) -> bool {
        self.user_index.contains_key(&user_id)
    }

    pub fn contains_article(&self, article_id: &ArticleId) -> bool {
        self.article_index.contains_key(article_id)
    }

    /// Count for a (user, article) pair; 0 when either is absent.
    pub fn get(&self, user_id: UserId, article_id: &ArticleId) -> u32 {
        match (self.user_index(user_id), self.article_index(article_id)) {
            (Some(r), Some(c)) => self.cells[(r, c)],
            _ => 0,
        }
    }

    /// The count cells, users × articles.
    pub fn cells(&self) -> &DMatrix<u32> {
        &self.cells
    }

    /// The cells as `f64`, for factorization.
    pub fn to_f64(&self) -> DMatrix<f64> {
        self.cells.map(f64::from)
    }

    /// Total interactions of a user.
    pub fn row_sum(&self, user_id: UserId) -> Option<u64> {
        self.user_index(user_id)
            .map(|i| u64::from(self.cells.row(i).sum()))
    }

    /// Total interactions per user, in row order.
    pub fn row_sums(&self) -> Vec<u64> {
        self.cells.column_sum().iter().map(|&s| u64::from(s)).collect()
    }

    /// Total interactions per article, in column order.
    pub fn column_sums(&self) -> Vec<u64> {
        self.cells.row_sum().iter().map(|&s| u64::from(s)).collect()
    }

    /// Sum of all cells.
    pub fn total(&self) -> u64 {
        self.cells.iter().map(|&c| u64::from(c)).sum()
    }

    /// Articles the user has seen (count ≥ 1), in column order.
    pub fn seen_articles(&self, user_id: UserId) -> Option<Vec<ArticleId>> {
        let i = self.user_index(user_id)?;
        Some(
            self.cells
                .row(i)
                .iter()
                .zip(&self.articles)
                .filter(|(&c, _)| c >= 1)
                .map(|(_, a)| a.clone())
                .collect(),
        )
    }

    /// Dot product of two rows.
    pub fn dot_rows(&self, a: usize, b: usize) -> u64 {
        u64::from(self.cells.row(a).dot(&self.cells.row(b)))
    }

    /// Dot product of row `index` with every row, in row order.
    pub fn row_products(&self, index: usize) -> Vec<u64> {
        let products = &self.cells * self.cells.row(index).transpose();
        products.iter().map(|&p| u64::from(p)).collect()
    }
}

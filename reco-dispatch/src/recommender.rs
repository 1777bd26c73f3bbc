//! Recommender: owns all strategies and dispatches per user.

use std::collections::HashSet;
use std::sync::Arc;

use reco_collab::CollaborativeFilter;
use reco_content::ContentEngine;
use reco_core::config::{DispatchConfig, RecoConfig};
use reco_core::ingest::{self, CleanTables, RawArticle, RawInteraction};
use reco_core::models::{
    AccuracyCurve, Interaction, Recommendations, Strategy, UserId, UserSegment,
};
use reco_core::traits::IRecommender;
use reco_core::RecoResult;
use reco_factor::LatentFactorEvaluator;
use reco_matrix::{TitleIndex, UserItemMatrix};
use reco_observability::events;
use reco_popularity::PopularityRanker;
use tracing::info;

/// All strategies, built once and read-only afterwards.
#[derive(Debug)]
pub struct Recommender {
    matrix: Arc<UserItemMatrix>,
    popularity: PopularityRanker,
    collaborative: CollaborativeFilter,
    content: ContentEngine,
    evaluator: LatentFactorEvaluator,
    interactions: Vec<Interaction>,
    /// Users whose total interactions fall below the sparse-history threshold.
    sparse_users: HashSet<UserId>,
    config: DispatchConfig,
}

impl Recommender {
    /// Build from clean tables. The config is validated first.
    pub fn build(tables: CleanTables, config: &RecoConfig) -> RecoResult<Self> {
        config.validate()?;
        let CleanTables {
            interactions,
            articles,
        } = tables;

        let matrix = Arc::new(UserItemMatrix::build(&interactions));
        let titles = Arc::new(TitleIndex::build(&interactions, &articles));

        let popularity = PopularityRanker::new(&interactions, config.popularity.clone());
        let collaborative = CollaborativeFilter::new(
            Arc::clone(&matrix),
            Arc::clone(&titles),
            config.collaborative.clone(),
        );
        let content = ContentEngine::new(
            &articles,
            &interactions,
            Arc::clone(&titles),
            config.content.clone(),
        );
        let evaluator = LatentFactorEvaluator::new(config.factorization.clone());

        let threshold = config.dispatch.sparse_history_threshold;
        let sparse_users: HashSet<UserId> = matrix
            .users()
            .iter()
            .zip(matrix.row_sums())
            .filter(|(_, total)| *total < threshold)
            .map(|(&user, _)| user)
            .collect();

        info!(
            interactions = interactions.len(),
            articles = articles.len(),
            users = matrix.n_users(),
            sparse_users = sparse_users.len(),
            "recommender built"
        );

        Ok(Self {
            matrix,
            popularity,
            collaborative,
            content,
            evaluator,
            interactions,
            sparse_users,
            config: config.dispatch.clone(),
        })
    }

    /// Clean raw rows, then build.
    pub fn from_raw(
        raw_interactions: &[RawInteraction],
        raw_articles: &[RawArticle],
        config: &RecoConfig,
    ) -> RecoResult<Self> {
        let tables = ingest::clean(raw_interactions, raw_articles)?;
        Self::build(tables, config)
    }

    pub fn matrix(&self) -> &UserItemMatrix {
        &self.matrix
    }

    pub fn popularity(&self) -> &PopularityRanker {
        &self.popularity
    }

    pub fn collaborative(&self) -> &CollaborativeFilter {
        &self.collaborative
    }

    pub fn content(&self) -> &ContentEngine {
        &self.content
    }

    pub fn evaluator(&self) -> &LatentFactorEvaluator {
        &self.evaluator
    }

    pub fn default_top_n(&self) -> usize {
        self.config.default_top_n
    }

    pub fn classify(&self, user_id: UserId) -> UserSegment {
        if !self.content.contains_user(user_id) {
            UserSegment::Unknown
        } else if self.sparse_users.contains(&user_id) {
            UserSegment::SparseHistory
        } else {
            UserSegment::Established
        }
    }

    fn strategy(&self, strategy: Strategy) -> &dyn IRecommender {
        match strategy {
            Strategy::Popularity => &self.popularity,
            Strategy::Collaborative => &self.collaborative,
            Strategy::Content => &self.content,
        }
    }

    /// Recommendations for one user. `None` uses the configured default count
    /// and never changes it.
    ///
    /// Only an `Empty` content result falls back to popularity; a
    /// `NotApplicable` one is returned as is.
    pub fn recommend_articles(&self, user_id: UserId, top_n: Option<usize>) -> Recommendations {
        let top_n = top_n.unwrap_or(self.config.default_top_n);
        let _span = reco_observability::recommend_span!(user_id, top_n).entered();

        let segment = self.classify(user_id);
        let primary = match segment {
            UserSegment::Unknown => Strategy::Popularity,
            UserSegment::SparseHistory => Strategy::Content,
            UserSegment::Established => Strategy::Collaborative,
        };
        events::strategy_selected(user_id, segment, primary);

        let outcome = self.strategy(primary).recommend(user_id, top_n);
        if segment == UserSegment::SparseHistory && outcome.is_empty() {
            events::fallback_triggered(user_id, primary, Strategy::Popularity);
            return Recommendations {
                user_id,
                segment,
                strategy: Strategy::Popularity,
                fell_back: true,
                outcome: self.popularity.recommend(user_id, top_n),
            };
        }

        Recommendations {
            user_id,
            segment,
            strategy: primary,
            fell_back: false,
            outcome,
        }
    }

    /// Latent-factor accuracy curve over the configured split and sweep.
    pub fn mf_calculate_error(&self) -> RecoResult<AccuracyCurve> {
        Ok(self.evaluator.calculate_error(&self.interactions)?)
    }
}

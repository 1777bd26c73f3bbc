//! Structured log events for key recommender operations.
//!
//! Each function emits a `tracing` event with structured fields.

use reco_core::models::{Strategy, UserId, UserSegment};

/// Log the strategy chosen for a user.
pub fn strategy_selected(user_id: UserId, segment: UserSegment, strategy: Strategy) {
    tracing::info!(
        event = "strategy_selected",
        user_id = user_id,
        segment = ?segment,
        strategy = strategy.name(),
        "strategy selected"
    );
}

/// Log a fallback from one strategy to another.
pub fn fallback_triggered(user_id: UserId, from: Strategy, to: Strategy) {
    tracing::warn!(
        event = "fallback_triggered",
        user_id = user_id,
        from = from.name(),
        to = to.name(),
        "primary strategy returned no results, falling back"
    );
}

/// Log a swallowed article lookup failure.
pub fn lookup_failed(article_id: &str) {
    tracing::debug!(
        event = "lookup_failed",
        article_id = %article_id,
        "article has no metadata row, no similar articles"
    );
}

/// Log users and articles dropped from evaluation for lack of train history.
pub fn cold_start_excluded(users: usize, articles: usize) {
    tracing::info!(
        event = "cold_start_excluded",
        users = users,
        articles = articles,
        "test users/articles absent from train excluded"
    );
}

/// Log completion of a latent-factor accuracy sweep.
pub fn accuracy_sweep_completed(steps: usize, best_latent_factors: Option<usize>) {
    tracing::info!(
        event = "accuracy_sweep_completed",
        steps = steps,
        best_latent_factors = ?best_latent_factors,
        "latent factor accuracy sweep completed"
    );
}

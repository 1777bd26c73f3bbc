use crate::models::{RecommendationOutcome, Strategy, UserId};

/// A strategy that turns a user id into ranked article recommendations.
pub trait IRecommender: Send + Sync {
    /// Recommend up to `top_n` articles for `user_id`.
    fn recommend(&self, user_id: UserId, top_n: usize) -> RecommendationOutcome;

    /// Which strategy this is.
    fn strategy(&self) -> Strategy;
}

//! Rebuild-then-swap holder for serving a recommender across threads.

use std::sync::{Arc, PoisonError, RwLock};

use reco_core::config::RecoConfig;
use reco_core::ingest::CleanTables;
use reco_core::models::{Recommendations, UserId};
use reco_core::RecoResult;
use tracing::info;

use crate::Recommender;

/// Holds the current [`Recommender`].
///
/// Readers take an `Arc` to a fully built recommender. A rebuild constructs
/// the replacement outside the lock and swaps it in, so a half-built
/// recommender is never visible.
#[derive(Debug)]
pub struct SharedRecommender {
    current: RwLock<Arc<Recommender>>,
}

impl SharedRecommender {
    pub fn new(recommender: Recommender) -> Self {
        Self {
            current: RwLock::new(Arc::new(recommender)),
        }
    }

    /// The recommender serving requests right now.
    pub fn current(&self) -> Arc<Recommender> {
        // The guarded value is only ever replaced whole, so a poisoned lock
        // still holds a complete recommender.
        let guard = self.current.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&guard)
    }

    /// Swap in a new recommender, returning the previous one.
    pub fn replace(&self, recommender: Recommender) -> Arc<Recommender> {
        let next = Arc::new(recommender);
        let mut guard = self.current.write().unwrap_or_else(PoisonError::into_inner);
        std::mem::replace(&mut *guard, next)
    }

    /// Build a recommender from fresh tables and swap it in. On error the
    /// current recommender stays in place.
    pub fn rebuild(&self, tables: CleanTables, config: &RecoConfig) -> RecoResult<()> {
        let next = Recommender::build(tables, config)?;
        self.replace(next);
        info!("recommender snapshot replaced");
        Ok(())
    }

    pub fn recommend_articles(&self, user_id: UserId, top_n: Option<usize>) -> Recommendations {
        self.current().recommend_articles(user_id, top_n)
    }
}

//! Span definitions per operation: recommend, similarity build, factorization.

/// Create a recommend span.
#[macro_export]
macro_rules! recommend_span {
    ($user_id:expr, $top_n:expr) => {
        tracing::info_span!("reco.recommend", user_id = $user_id, top_n = $top_n)
    };
}

/// Create a similarity-matrix build span.
#[macro_export]
macro_rules! similarity_span {
    ($documents:expr) => {
        tracing::info_span!("reco.similarity", documents = $documents)
    };
}

/// Create a factorization sweep span.
#[macro_export]
macro_rules! factorization_span {
    ($train_rows:expr, $test_rows:expr) => {
        tracing::info_span!(
            "reco.factorization",
            train_rows = $train_rows,
            test_rows = $test_rows
        )
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECOMMEND: &str = "reco.recommend";
    pub const SIMILARITY: &str = "reco.similarity";
    pub const FACTORIZATION: &str = "reco.factorization";
}

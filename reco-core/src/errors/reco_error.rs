//! Top-level error aggregating subsystem errors via `From` conversions.

use super::error_code::RecoErrorCode;
use super::{ConfigError, FactorizationError, IngestError};

#[derive(Debug, thiserror::Error)]
pub enum RecoError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Ingest error: {0}")]
    Ingest(#[from] IngestError),

    #[error("Factorization error: {0}")]
    Factorization(#[from] FactorizationError),
}

pub type RecoResult<T> = Result<T, RecoError>;

impl RecoErrorCode for RecoError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Config(e) => e.error_code(),
            Self::Ingest(e) => e.error_code(),
            Self::Factorization(e) => e.error_code(),
        }
    }
}

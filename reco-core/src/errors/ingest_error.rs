//! Ingestion boundary errors.

use super::error_code::{self, RecoErrorCode};

/// Raw rows that cannot be normalized into the clean tables.
#[derive(Debug, thiserror::Error)]
pub enum IngestError {
    #[error("empty article id in {table} row {row}")]
    EmptyArticleId { table: &'static str, row: usize },
}

impl RecoErrorCode for IngestError {
    fn error_code(&self) -> &'static str {
        error_code::INGEST_ERROR
    }
}

//! Error handling for the recommender.
//! One error enum per subsystem, `thiserror` only.

pub mod config_error;
pub mod error_code;
pub mod factorization_error;
pub mod ingest_error;
pub mod reco_error;

pub use config_error::ConfigError;
pub use error_code::RecoErrorCode;
pub use factorization_error::FactorizationError;
pub use ingest_error::IngestError;
pub use reco_error::{RecoError, RecoResult};

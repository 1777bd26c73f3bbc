//! RecoErrorCode trait for presentation-layer conversion.

/// Every error enum implements this to provide a structured error code
/// string the presentation layer can map to a user-facing message.
pub trait RecoErrorCode {
    /// Returns the error code string (e.g., "CONFIG_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const INGEST_ERROR: &str = "INGEST_ERROR";
pub const EMPTY_TRAIN_MATRIX: &str = "EMPTY_TRAIN_MATRIX";
pub const EMPTY_EVALUATION_SET: &str = "EMPTY_EVALUATION_SET";
pub const DECOMPOSITION_FAILED: &str = "DECOMPOSITION_FAILED";

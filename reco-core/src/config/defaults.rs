// Single source of truth for all default values.

// --- Shared ---
pub const DEFAULT_TOP_N: usize = 10;

// --- Content ---
pub const DEFAULT_SIMILAR_PER_ARTICLE: usize = 2;
pub const DEFAULT_REMOVE_STOP_WORDS: bool = true;

// --- Factorization ---
pub const DEFAULT_TRAIN_ROWS: usize = 40_000;
pub const DEFAULT_TEST_ROWS: usize = 5_993;
pub const DEFAULT_LATENT_FACTOR_START: usize = 10;
pub const DEFAULT_LATENT_FACTOR_STOP: usize = 710; // exclusive
pub const DEFAULT_LATENT_FACTOR_STEP: usize = 20;

// --- Dispatch ---
pub const DEFAULT_SPARSE_HISTORY_THRESHOLD: u64 = 3;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;

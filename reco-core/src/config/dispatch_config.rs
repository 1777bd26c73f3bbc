use serde::{Deserialize, Serialize};

use super::defaults;

/// Recommendation dispatcher configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Number of recommendations when the caller gives no explicit count.
    pub default_top_n: usize,
    /// Users with fewer total interactions than this are served by content similarity.
    pub sparse_history_threshold: u64,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            sparse_history_threshold: defaults::DEFAULT_SPARSE_HISTORY_THRESHOLD,
        }
    }
}

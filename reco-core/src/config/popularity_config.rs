use serde::{Deserialize, Serialize};

use super::defaults;

/// Popularity ranker configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PopularityConfig {
    /// Number of articles returned when the caller gives no explicit count.
    pub default_top_n: usize,
}

impl Default for PopularityConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
        }
    }
}

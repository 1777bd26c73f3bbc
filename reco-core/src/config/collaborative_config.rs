use serde::{Deserialize, Serialize};

use super::defaults;

/// User-based collaborative filter configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CollaborativeConfig {
    /// Number of recommendations when the caller gives no explicit count.
    pub default_top_n: usize,
}

impl Default for CollaborativeConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Content similarity engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentConfig {
    /// Number of recommendations when the caller gives no explicit count.
    pub default_top_n: usize,
    /// Similar articles pulled per already-read article.
    pub similar_per_article: usize,
    /// Drop English stop words before TF-IDF weighting.
    pub remove_stop_words: bool,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            default_top_n: defaults::DEFAULT_TOP_N,
            similar_per_article: defaults::DEFAULT_SIMILAR_PER_ARTICLE,
            remove_stop_words: defaults::DEFAULT_REMOVE_STOP_WORDS,
        }
    }
}

use serde::{Deserialize, Serialize};

use super::defaults;

/// Latent factor evaluator configuration.
///
/// The split is positional: the first `train_rows` interactions form the
/// train slice and the last `test_rows` the test slice.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorizationConfig {
    pub train_rows: usize,
    pub test_rows: usize,
    /// First latent-factor count in the sweep.
    pub latent_factor_start: usize,
    /// Exclusive upper bound of the sweep.
    pub latent_factor_stop: usize,
    pub latent_factor_step: usize,
}

impl FactorizationConfig {
    /// The latent-factor counts visited by the accuracy sweep.
    pub fn latent_factor_counts(&self) -> Vec<usize> {
        if self.latent_factor_step == 0 {
            return Vec::new();
        }
        (self.latent_factor_start..self.latent_factor_stop)
            .step_by(self.latent_factor_step)
            .collect()
    }
}

impl Default for FactorizationConfig {
    fn default() -> Self {
        Self {
            train_rows: defaults::DEFAULT_TRAIN_ROWS,
            test_rows: defaults::DEFAULT_TEST_ROWS,
            latent_factor_start: defaults::DEFAULT_LATENT_FACTOR_START,
            latent_factor_stop: defaults::DEFAULT_LATENT_FACTOR_STOP,
            latent_factor_step: defaults::DEFAULT_LATENT_FACTOR_STEP,
        }
    }
}

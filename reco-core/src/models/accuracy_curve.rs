use serde::{Deserialize, Serialize};

/// Output of the latent-factor accuracy sweep: three parallel sequences.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AccuracyCurve {
    pub latent_factors: Vec<usize>,
    pub test_accuracy: Vec<f64>,
    pub train_accuracy: Vec<f64>,
}

impl AccuracyCurve {
    pub fn len(&self) -> usize {
        self.latent_factors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.latent_factors.is_empty()
    }

    /// Iterate `(latent_factors, test_accuracy, train_accuracy)` triples.
    pub fn points(&self) -> impl Iterator<Item = (usize, f64, f64)> + '_ {
        self.latent_factors
            .iter()
            .zip(&self.test_accuracy)
            .zip(&self.train_accuracy)
            .map(|((k, test), train)| (*k, *test, *train))
    }

    /// Latent-factor count with the highest test accuracy (first on ties).
    pub fn best_test(&self) -> Option<(usize, f64)> {
        self.points()
            .map(|(k, test, _)| (k, test))
            .fold(None, |best, (k, test)| match best {
                Some((_, b)) if b >= test => best,
                _ => Some((k, test)),
            })
    }
}

//! Positional head/tail split of the interaction table.

use reco_core::models::Interaction;

/// Head slice for training, tail slice for testing.
///
/// Both counts are clamped to the table length, so on a short table the two
/// slices overlap.
#[derive(Debug, Clone, Copy)]
pub struct TrainTestSplit<'a> {
    pub train: &'a [Interaction],
    pub test: &'a [Interaction],
}

impl<'a> TrainTestSplit<'a> {
    pub fn new(interactions: &'a [Interaction], train_rows: usize, test_rows: usize) -> Self {
        let n = interactions.len();
        Self {
            train: &interactions[..train_rows.min(n)],
            test: &interactions[n - test_rows.min(n)..],
        }
    }
}

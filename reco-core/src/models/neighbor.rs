use serde::{Deserialize, Serialize};

use super::UserId;

/// A row of the neighbor ranking table built during a single recommend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbor {
    pub neighbor_id: UserId,
    /// Unnormalized dot product with the target user's row.
    pub similarity: u64,
    /// Total interactions of the neighbor (row sum).
    pub num_interactions: u64,
}

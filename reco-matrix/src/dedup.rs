use std::collections::HashSet;

use reco_core::models::Interaction;

/// Drop exact duplicate rows, keeping the first occurrence and input order.
pub fn dedup_interactions(interactions: &[Interaction]) -> Vec<&Interaction> {
    let mut seen: HashSet<&Interaction> = HashSet::with_capacity(interactions.len());
    interactions.iter().filter(|i| seen.insert(*i)).collect()
}

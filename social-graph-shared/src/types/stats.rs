use serde::{Deserialize, Serialize};

/// Row counts currently held by a store.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct StoreStats {
    pub persons: u64,
    pub clubs: u64,
    pub memberships: u64,
    pub friendships: u64,
}

/// What a single load produced.
///
/// `dangling_friends` counts friend ids that did not match any loaded person and
/// were dropped. `duplicate_edges` counts repeated club descriptions or friend ids
/// within a record that collapsed into an existing edge.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LoadSummary {
    pub persons: u64,
    pub clubs: u64,
    pub memberships: u64,
    pub friendships: u64,
    pub dangling_friends: u64,
    pub duplicate_edges: u64,
}

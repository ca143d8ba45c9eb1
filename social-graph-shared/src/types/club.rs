use serde::{Deserialize, Serialize};

/// Identifier of a club, assigned in first-seen order during a load.
pub type ClubId = i64;

/// A club, keyed naturally by its description.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Club {
    pub id: ClubId,
    pub description: String,
}

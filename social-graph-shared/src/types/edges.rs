use serde::{Deserialize, Serialize};
use crate::types::{ClubId, PersonId};

/// Directed edge: `person_id` considers `friend_id` a friend.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Friendship {
    pub person_id: PersonId,
    pub friend_id: PersonId,
}

/// A person's membership in a club.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Membership {
    pub person_id: PersonId,
    pub club_id: ClubId,
}

//! Turns input records into the exact rows a store should hold.
//!
//! Planning is pure and runs before a repository touches its storage, so a
//! malformed input is rejected without disturbing the data already loaded.
//! Nodes and memberships are planned in a first pass over the records and
//! friendships in a second one, which lets a friend id refer to a person that
//! appears later in the input.
mod error;

use std::collections::{HashMap, HashSet};

use crate::types::{Club, ClubId, Friendship, LoadSummary, Membership, Person, PersonId, PersonRecord};

pub use error::PlanError;

/// The complete contents of a store after loading a set of records.
///
/// Every vector is in creation order. Repositories persist memberships and
/// friendships in that order so queries can return them the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoadPlan {
    pub persons: Vec<Person>,
    pub clubs: Vec<Club>,
    pub memberships: Vec<Membership>,
    pub friendships: Vec<Friendship>,
    pub dangling_friends: u64,
    pub duplicate_edges: u64,
}

impl LoadPlan {
    /// Builds the plan for `records`.
    ///
    /// Club ids start at 1 and follow the order in which descriptions are first
    /// seen across all records. Friend ids that match no record are dropped.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::DuplicatePersonId` when two records share an id.
    pub fn build(records: &[PersonRecord]) -> Result<Self, PlanError> {
        let mut plan = LoadPlan::default();
        let mut seen_persons: HashMap<PersonId, usize> = HashMap::with_capacity(records.len());
        let mut club_ids: HashMap<&str, ClubId> = HashMap::new();
        let mut memberships: HashSet<Membership> = HashSet::new();

        for (index, record) in records.iter().enumerate() {
            if let Some(first) = seen_persons.insert(record.id, index) {
                return Err(PlanError::DuplicatePersonId {
                    id: record.id,
                    first,
                    second: index,
                });
            }

            plan.persons.push(Person {
                id: record.id,
                name: record.display_name(),
                age: record.age,
                gender: record.gender.clone(),
                location: record.location.clone(),
            });

            for description in &record.clubs {
                let club_id = match club_ids.get(description.as_str()) {
                    Some(id) => *id,
                    None => {
                        let id = plan.clubs.len() as ClubId + 1;
                        club_ids.insert(description.as_str(), id);
                        plan.clubs.push(Club {
                            id,
                            description: description.clone(),
                        });
                        id
                    }
                };

                let membership = Membership {
                    person_id: record.id,
                    club_id,
                };
                if memberships.insert(membership) {
                    plan.memberships.push(membership);
                } else {
                    plan.duplicate_edges += 1;
                }
            }
        }

        let mut friendships: HashSet<Friendship> = HashSet::new();
        for record in records {
            for friend_id in &record.friends {
                if !seen_persons.contains_key(friend_id) {
                    plan.dangling_friends += 1;
                    continue;
                }

                let friendship = Friendship {
                    person_id: record.id,
                    friend_id: *friend_id,
                };
                if friendships.insert(friendship) {
                    plan.friendships.push(friendship);
                } else {
                    plan.duplicate_edges += 1;
                }
            }
        }

        Ok(plan)
    }

    /// Summarises what persisting this plan produces.
    pub fn summary(&self) -> LoadSummary {
        LoadSummary {
            persons: self.persons.len() as u64,
            clubs: self.clubs.len() as u64,
            memberships: self.memberships.len() as u64,
            friendships: self.friendships.len() as u64,
            dangling_friends: self.dangling_friends,
            duplicate_edges: self.duplicate_edges,
        }
    }
}

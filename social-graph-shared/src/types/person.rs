use serde::{Deserialize, Serialize};

/// Identifier of a person, taken verbatim from the input data.
pub type PersonId = i64;

/// A person held by the social graph store.
///
/// The display name is the given name and surname joined by a single space.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Person {
    pub id: PersonId,
    pub name: String,
    pub age: i64,
    pub gender: String,
    pub location: String,
}

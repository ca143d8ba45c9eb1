use serde::{Deserialize, Serialize};
use crate::types::PersonId;

/// One input row, after its list-valued columns have been parsed.
///
/// This is the unit the loader hands to a repository. Club descriptions and
/// friend ids keep the order in which they appeared in the source row.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PersonRecord {
    pub id: PersonId,
    pub given_name: String,
    pub surname: String,
    pub age: i64,
    pub gender: String,
    pub location: String,
    pub clubs: Vec<String>,
    pub friends: Vec<PersonId>,
}

impl PersonRecord {
    /// The display name stored for this record: `"<given> <surname>"`.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.given_name, self.surname)
    }
}

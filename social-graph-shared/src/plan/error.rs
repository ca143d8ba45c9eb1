use thiserror::Error;
use crate::types::PersonId;

/// Errors that make a set of input records impossible to load.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PlanError {
    #[error("Duplicate person id {id} in records {first} and {second}")]
    DuplicatePersonId {
        id: PersonId,
        first: usize,
        second: usize,
    },
}

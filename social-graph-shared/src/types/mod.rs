mod club;
mod edges;
mod person;
mod person_record;
mod stats;

pub use club::{Club, ClubId};
pub use edges::{Friendship, Membership};
pub use person::{Person, PersonId};
pub use person_record::PersonRecord;
pub use stats::{LoadSummary, StoreStats};

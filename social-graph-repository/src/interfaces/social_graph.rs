//! This module defines the `SocialGraphRepository` trait, the interface to a store
//! of people, clubs, memberships and directed friendships.
use social_graph_shared::types::{Club, LoadSummary, Person, PersonRecord, StoreStats};
use crate::errors::SocialGraphRepositoryError;

/// A trait that defines the interface for interacting with the social graph store.
///
/// A store holds exactly one generation of data: `load` replaces everything it
/// held before. Queries keyed on a person's name resolve to the person with the
/// lowest id when several share that name. A query whose key matches nothing
/// returns an empty vector.
#[async_trait::async_trait]
pub trait SocialGraphRepository: Send + Sync {
    /// Replaces the store's contents with the graph described by `records`.
    ///
    /// # Arguments
    ///
    /// * `records` - Parsed input rows, in input order.
    ///
    /// # Returns
    ///
    /// A `LoadSummary` of what was created, or a `SocialGraphRepositoryError`.
    /// On error the previous contents are left untouched.
    async fn load(
        &self,
        records: &[PersonRecord],
    ) -> Result<LoadSummary, SocialGraphRepositoryError>;

    /// Returns the members of the club with exactly this description, in
    /// membership-creation order.
    async fn get_club_members(
        &self,
        description: &str,
    ) -> Result<Vec<Person>, SocialGraphRepositoryError>;

    /// Returns the people the named person lists as friends, in edge-creation order.
    async fn get_friends_of(
        &self,
        person_name: &str,
    ) -> Result<Vec<Person>, SocialGraphRepositoryError>;

    /// Returns the people who list the named person as a friend, in edge-creation order.
    async fn get_admirers_of(
        &self,
        person_name: &str,
    ) -> Result<Vec<Person>, SocialGraphRepositoryError>;

    /// Returns the clubs the named person belongs to, in membership-creation order.
    async fn get_clubs_of(
        &self,
        person_name: &str,
    ) -> Result<Vec<Club>, SocialGraphRepositoryError>;

    /// Returns the number of rows currently held.
    async fn stats(&self) -> Result<StoreStats, SocialGraphRepositoryError>;
}

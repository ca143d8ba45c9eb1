//! Query execution for the command line.
use serde::Serialize;
use social_graph_repository::SocialGraphRepository;
use social_graph_shared::types::{Club, Person};
use tracing::debug;

use crate::errors::AppError;

/// A lookup requested on the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    ClubMembers(String),
    FriendsOf(String),
    AdmirersOf(String),
    ClubsOf(String),
}

impl Query {
    fn name(&self) -> &'static str {
        match self {
            Query::ClubMembers(_) => "club_members",
            Query::FriendsOf(_) => "friends_of",
            Query::AdmirersOf(_) => "admirers_of",
            Query::ClubsOf(_) => "clubs_of",
        }
    }

    fn key(&self) -> &str {
        match self {
            Query::ClubMembers(key)
            | Query::FriendsOf(key)
            | Query::AdmirersOf(key)
            | Query::ClubsOf(key) => key,
        }
    }
}

/// The answer to a `Query`, as printed on stdout.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct QueryResult {
    pub query: &'static str,
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub persons: Option<Vec<Person>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub clubs: Option<Vec<Club>>,
}

/// Runs `query` against `repository`.
pub async fn run_query(
    repository: &dyn SocialGraphRepository,
    query: &Query,
) -> Result<QueryResult, AppError> {
    let key = query.key();
    let (persons, clubs) = match query {
        Query::ClubMembers(_) => (Some(repository.get_club_members(key).await?), None),
        Query::FriendsOf(_) => (Some(repository.get_friends_of(key).await?), None),
        Query::AdmirersOf(_) => (Some(repository.get_admirers_of(key).await?), None),
        Query::ClubsOf(_) => (None, Some(repository.get_clubs_of(key).await?)),
    };
    debug!(query = query.name(), key, "Query answered");

    Ok(QueryResult {
        query: query.name(),
        key: key.to_string(),
        persons,
        clubs,
    })
}

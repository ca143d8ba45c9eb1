//! SQLite implementation of the social graph repository.
mod social_graph_repository;

pub use social_graph_repository::SqliteSocialGraphRepository;

//! Error types for the social graph repository.
mod social_graph;

pub use social_graph::SocialGraphRepositoryError;

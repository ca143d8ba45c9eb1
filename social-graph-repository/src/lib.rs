//! # Social Graph Repository
//! This crate provides traits and implementations for interacting with the
//! social graph data store. It includes definitions for errors, interfaces,
//! and a concrete implementation for SQLite.
pub mod errors;
pub mod interfaces;
pub mod sqlite;

pub use errors::SocialGraphRepositoryError;
pub use interfaces::SocialGraphRepository;
pub use sqlite::SqliteSocialGraphRepository;

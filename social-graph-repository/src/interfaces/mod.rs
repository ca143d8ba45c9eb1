//! This module defines and re-exports the interfaces for the social graph repository.
mod social_graph;

pub use social_graph::SocialGraphRepository;

//! # Social Graph Shared
//! This crate defines the data structures shared across the social graph workspace.
//! It includes the person and club records returned by queries, the input record
//! produced by the loader, and the planner that turns input records into the
//! rows a repository persists.
pub mod plan;
pub mod types;

pub use plan::{LoadPlan, PlanError};

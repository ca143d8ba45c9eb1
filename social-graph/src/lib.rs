//! Social Graph Library
//!
//! This library wires the social graph crates into an application: configuration,
//! dependency construction, logging setup, error handling and query execution.

pub mod config;
pub mod errors;
pub mod logging;
pub mod query;

pub use config::{AppConfig, Cli, Dependencies};
pub use errors::{AppError, ConfigError};
pub use query::{Query, QueryResult, run_query};

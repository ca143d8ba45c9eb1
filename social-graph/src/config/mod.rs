//! Configuration module for the social graph application.
//! Defines the command line, the resolved application settings, and the
//! dependencies built from them.
mod app_config;
mod dependencies;

pub use app_config::{AppConfig, Cli, DEFAULT_DATABASE_URL};
pub use dependencies::Dependencies;

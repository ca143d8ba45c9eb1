use std::path::PathBuf;

use social_graph_repository::SocialGraphRepositoryError;
use thiserror::Error;

use crate::errors::LiteralError;

/// Represents errors that can occur while loading a CSV into the store.
///
/// Every variant is fatal to the load it came from. Dangling friend ids are not
/// errors and never surface here.
#[derive(Debug, Error)]
pub enum LoaderError {
    #[error("Failed to open {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Malformed CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Record {record}: invalid {column} list: {source}")]
    InvalidList {
        record: usize,
        column: &'static str,
        #[source]
        source: LiteralError,
    },

    #[error("Repository error: {0}")]
    Repository(#[from] SocialGraphRepositoryError),
}

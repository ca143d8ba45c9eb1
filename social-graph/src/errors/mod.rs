//! Error types for the social graph application.
//! Consolidates errors from configuration, loading, querying and output.
use social_graph_loader::LoaderError;
use social_graph_repository::SocialGraphRepositoryError;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("No CSV file given: pass a path or set SOCIAL_GRAPH_CSV")]
    MissingCsvPath,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Loader error: {0}")]
    Loader(#[from] LoaderError),
    #[error("Repository error: {0}")]
    Repository(#[from] SocialGraphRepositoryError),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

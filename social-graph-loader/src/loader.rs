//! This module defines the `SocialGraphLoader` struct, which reads the people CSV
//! and persists it through a `SocialGraphRepository`.
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use social_graph_repository::SocialGraphRepository;
use social_graph_shared::types::{LoadSummary, PersonRecord};
use tracing::{info, instrument, warn};

use crate::errors::LoaderError;
use crate::reader::{read_records, read_records_from_path};

/// `SocialGraphLoader` is responsible for turning tabular input into a loaded store.
///
/// The whole input is read and parsed before the repository is touched, so a
/// malformed file never disturbs the data already loaded.
pub struct SocialGraphLoader {
    pub repository: Arc<dyn SocialGraphRepository>,
}

impl SocialGraphLoader {
    /// Creates a new `SocialGraphLoader` backed by `repository`.
    pub fn new(repository: Arc<dyn SocialGraphRepository>) -> Self {
        Self { repository }
    }

    /// Loads the CSV file at `path`, replacing the store's contents.
    #[instrument(skip(self, path), fields(path = %path.display()))]
    pub async fn load_path(&self, path: &Path) -> Result<LoadSummary, LoaderError> {
        let records = read_records_from_path(path)?;
        self.load_records(&records).await
    }

    /// Loads CSV data from `reader`, replacing the store's contents.
    pub async fn load_reader<R: Read>(&self, reader: R) -> Result<LoadSummary, LoaderError> {
        let records = read_records(reader)?;
        self.load_records(&records).await
    }

    /// Persists already-parsed records, replacing the store's contents.
    pub async fn load_records(&self, records: &[PersonRecord]) -> Result<LoadSummary, LoaderError> {
        let summary = self.repository.load(records).await?;

        if summary.dangling_friends > 0 {
            warn!(
                dangling_friends = summary.dangling_friends,
                "Dropped friend references to unknown people"
            );
        }
        info!(
            persons = summary.persons,
            clubs = summary.clubs,
            friendships = summary.friendships,
            "Load complete"
        );
        Ok(summary)
    }
}

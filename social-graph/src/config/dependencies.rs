use std::sync::Arc;

use social_graph_loader::SocialGraphLoader;
use social_graph_repository::{SocialGraphRepository, SqliteSocialGraphRepository};
use tracing::info;

use crate::config::AppConfig;
use crate::errors::AppError;

/// `Dependencies` holds the components built from an `AppConfig`.
///
/// The loader and the query side share one repository.
pub struct Dependencies {
    pub repository: Arc<dyn SocialGraphRepository>,
    pub loader: SocialGraphLoader,
}

impl Dependencies {
    /// Opens the configured database and wires the loader to it.
    ///
    /// # Returns
    ///
    /// A `Result` which is `Ok(Self)` on success or an `AppError` if the
    /// database cannot be opened or migrated.
    pub async fn new(config: &AppConfig) -> Result<Self, AppError> {
        let repository: Arc<dyn SocialGraphRepository> =
            Arc::new(SqliteSocialGraphRepository::connect(&config.database_url).await?);
        info!(database_url = %config.database_url, "Social graph store ready");

        Ok(Dependencies {
            loader: SocialGraphLoader::new(repository.clone()),
            repository,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    use crate::config::DEFAULT_DATABASE_URL;
    use crate::query::{Query, run_query};

    fn make_config(database_url: &str) -> AppConfig {
        AppConfig {
            database_url: database_url.to_string(),
            csv_path: PathBuf::from("unused.csv"),
            queries: vec![],
        }
    }

    #[tokio::test]
    async fn test_loader_and_queries_share_the_store() {
        let dependencies = Dependencies::new(&make_config(DEFAULT_DATABASE_URL)).await.unwrap();

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "id,first_name,last_name,age,gender,location,clubs,friends").unwrap();
        writeln!(file, "0,John,Rocha,34,Male,Springfield,['Fitness Club'],[1]").unwrap();
        writeln!(file, "1,Amanda,Norris,29,Female,Shelbyville,['Fitness Club'],[]").unwrap();
        file.flush().unwrap();

        dependencies.loader.load_path(file.path()).await.unwrap();

        let result = run_query(
            dependencies.repository.as_ref(),
            &Query::ClubMembers("Fitness Club".to_string()),
        )
        .await
        .unwrap();
        assert_eq!(result.persons.map(|p| p.len()), Some(2));
    }

    #[tokio::test]
    async fn test_unopenable_database_path() {
        let result = Dependencies::new(&make_config("sqlite:///definitely/missing/dir/graph.db")).await;
        assert!(matches!(result, Err(AppError::Repository(_))));
    }
}

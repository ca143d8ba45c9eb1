use std::path::PathBuf;

use clap::Parser;

use crate::errors::ConfigError;
use crate::query::Query;

/// Database used when `DATABASE_URL` is not set.
pub const DEFAULT_DATABASE_URL: &str = "sqlite::memory:";

/// Load a people CSV into the social graph store and run lookups against it.
#[derive(Debug, Parser)]
#[command(name = "social-graph", version)]
pub struct Cli {
    /// CSV file to load. Defaults to `SOCIAL_GRAPH_CSV`.
    pub csv: Option<PathBuf>,

    /// Database URL. Defaults to `DATABASE_URL`, then an in-memory database.
    #[arg(long)]
    pub database_url: Option<String>,

    /// List the members of a club.
    #[arg(long = "club", value_name = "DESCRIPTION")]
    pub club_members: Vec<String>,

    /// List the people a person considers friends.
    #[arg(long, value_name = "NAME")]
    pub friends_of: Vec<String>,

    /// List the people who consider a person a friend.
    #[arg(long, value_name = "NAME")]
    pub admirers_of: Vec<String>,

    /// List the clubs a person belongs to.
    #[arg(long, value_name = "NAME")]
    pub clubs_of: Vec<String>,
}

/// Settings for one run of the application.
///
/// Built once in `main` and passed by reference to whatever needs it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub csv_path: PathBuf,
    pub queries: Vec<Query>,
}

impl AppConfig {
    /// Resolves settings from the command line, falling back to the environment.
    ///
    /// Command-line values win over `DATABASE_URL` and `SOCIAL_GRAPH_CSV`.
    pub fn from_cli(cli: Cli) -> Result<Self, ConfigError> {
        let csv_path = cli
            .csv
            .or_else(|| std::env::var_os("SOCIAL_GRAPH_CSV").map(PathBuf::from))
            .ok_or(ConfigError::MissingCsvPath)?;

        let database_url = cli
            .database_url
            .or_else(|| std::env::var("DATABASE_URL").ok())
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let queries = cli
            .club_members
            .into_iter()
            .map(Query::ClubMembers)
            .chain(cli.friends_of.into_iter().map(Query::FriendsOf))
            .chain(cli.admirers_of.into_iter().map(Query::AdmirersOf))
            .chain(cli.clubs_of.into_iter().map(Query::ClubsOf))
            .collect();

        Ok(Self {
            database_url,
            csv_path,
            queries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;
    use std::env;

    fn clear_env_vars() {
        unsafe {
            env::remove_var("DATABASE_URL");
            env::remove_var("SOCIAL_GRAPH_CSV");
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::parse_from(std::iter::once("social-graph").chain(args.iter().copied()))
    }

    #[test]
    #[serial]
    fn test_defaults_to_in_memory_database() {
        clear_env_vars();
        let config = AppConfig::from_cli(parse(&["people.csv"])).unwrap();

        assert_eq!(config.database_url, DEFAULT_DATABASE_URL);
        assert_eq!(config.csv_path, PathBuf::from("people.csv"));
        assert!(config.queries.is_empty());
    }

    #[test]
    #[serial]
    fn test_missing_csv_path() {
        clear_env_vars();
        let result = AppConfig::from_cli(parse(&[]));
        assert!(matches!(result, Err(ConfigError::MissingCsvPath)));
    }

    #[test]
    #[serial]
    fn test_environment_fallbacks() {
        clear_env_vars();
        unsafe {
            env::set_var("SOCIAL_GRAPH_CSV", "/data/people.csv");
            env::set_var("DATABASE_URL", "sqlite://graph.db");
        }

        let config = AppConfig::from_cli(parse(&[])).unwrap();
        assert_eq!(config.csv_path, PathBuf::from("/data/people.csv"));
        assert_eq!(config.database_url, "sqlite://graph.db");

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_command_line_wins_over_environment() {
        clear_env_vars();
        unsafe {
            env::set_var("SOCIAL_GRAPH_CSV", "/data/people.csv");
            env::set_var("DATABASE_URL", "sqlite://graph.db");
        }

        let config = AppConfig::from_cli(parse(&[
            "other.csv",
            "--database-url",
            "sqlite://other.db",
        ]))
        .unwrap();
        assert_eq!(config.csv_path, PathBuf::from("other.csv"));
        assert_eq!(config.database_url, "sqlite://other.db");

        clear_env_vars();
    }

    #[test]
    #[serial]
    fn test_query_flags() {
        clear_env_vars();
        let config = AppConfig::from_cli(parse(&[
            "people.csv",
            "--friends-of",
            "John Rocha",
            "--club",
            "Fitness Club",
            "--admirers-of",
            "John Rocha",
            "--clubs-of",
            "Amanda Norris",
            "--club",
            "Chess",
        ]))
        .unwrap();

        assert_eq!(
            config.queries,
            vec![
                Query::ClubMembers("Fitness Club".to_string()),
                Query::ClubMembers("Chess".to_string()),
                Query::FriendsOf("John Rocha".to_string()),
                Query::AdmirersOf("John Rocha".to_string()),
                Query::ClubsOf("Amanda Norris".to_string()),
            ]
        );
    }
}

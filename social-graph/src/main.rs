use clap::Parser;
use dotenv::dotenv;
use social_graph::{AppConfig, AppError, Cli, Dependencies, logging, run_query};

/// Main entry point for the social graph application.
///
/// Loads `.env`, installs logging, resolves the configuration, loads the CSV
/// into the store and prints the answer to each requested query as JSON. With
/// no queries, prints the store's row counts instead.
#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenv().ok();
    logging::init();

    let config = AppConfig::from_cli(Cli::parse())?;
    let dependencies = Dependencies::new(&config).await?;

    dependencies.loader.load_path(&config.csv_path).await?;

    if config.queries.is_empty() {
        let stats = dependencies.repository.stats().await?;
        println!("{}", serde_json::to_string_pretty(&stats)?);
        return Ok(());
    }

    for query in &config.queries {
        let result = run_query(dependencies.repository.as_ref(), query).await?;
        println!("{}", serde_json::to_string_pretty(&result)?);
    }
    Ok(())
}

//! Init command - Creates the database file if missing.

use crate::config::Config;
use crate::errors::AppResult;
use crate::infra::JsonStore;

/// Execute the init command
pub async fn execute(config: Config) -> AppResult<()> {
    tracing::info!(path = %config.database_path.display(), "Ensuring database...");

    JsonStore::new(&config.database_path)
        .ensure_database()
        .await?;

    println!("database ensured!");
    Ok(())
}

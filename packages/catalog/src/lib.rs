pub mod config;
pub mod database;
pub mod entity;
pub mod error;
pub mod models;
pub mod render;
pub mod revision;
pub mod seed;
pub mod services;
pub mod utils;
pub mod validation;

use sea_orm::DatabaseConnection;
use tracing::info;

use crate::config::AppConfig;
use crate::error::CatalogError;

/// Connect to the configured store, sync the schema and make sure the
/// sentinel account exists.
pub async fn bootstrap(config: &AppConfig) -> Result<DatabaseConnection, CatalogError> {
    let db = database::init_db(&config.database).await?;
    seed::ensure_indexes(&db).await?;
    let sentinel = services::account::resolve_sentinel_account(&db, &config.accounts).await?;
    info!(sentinel_id = sentinel.id, "Catalog schema ready");
    Ok(db)
}

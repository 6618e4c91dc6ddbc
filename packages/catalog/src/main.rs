use sea_orm::{EntityTrait, PaginatorTrait};
use tracing::{Level, info};

use catalog::config::AppConfig;
use catalog::entity::{exercise, solution, subject};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let config = AppConfig::load()?;
    let db = catalog::bootstrap(&config).await?;

    let subjects = subject::Entity::find().count(&db).await?;
    let exercises = exercise::Entity::find().count(&db).await?;
    let solutions = solution::Entity::find().count(&db).await?;
    info!(subjects, exercises, solutions, "Catalog store initialized");

    Ok(())
}

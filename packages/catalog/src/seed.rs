use chrono::Utc;
use sea_orm::sea_query::{Index, OnConflict};
use sea_orm::*;
use tracing::{info, warn};

use crate::entity::{account, revision};

/// Fetch the reserved sentinel account, creating it on first use.
///
/// Safe to call concurrently: the insert is a no-op when another caller
/// created the row first.
pub async fn ensure_sentinel_account<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<account::Model, DbErr> {
    if let Some(existing) = find_account(db, username).await? {
        return Ok(existing);
    }

    let model = account::ActiveModel {
        username: Set(username.to_string()),
        created_at: Set(Utc::now()),
        ..Default::default()
    };

    let result = account::Entity::insert(model)
        .on_conflict(
            OnConflict::column(account::Column::Username)
                .do_nothing()
                .to_owned(),
        )
        .exec_without_returning(db)
        .await;

    match result {
        Ok(_) => info!(username, "Created sentinel account"),
        Err(DbErr::RecordNotInserted) => {}
        Err(e) => return Err(e),
    }

    find_account(db, username)
        .await?
        .ok_or_else(|| DbErr::RecordNotFound(format!("sentinel account '{username}'")))
}

async fn find_account<C: ConnectionTrait>(
    db: &C,
    username: &str,
) -> Result<Option<account::Model>, DbErr> {
    account::Entity::find()
        .filter(account::Column::Username.eq(username))
        .one(db)
        .await
}

/// Ensure required database indexes exist.
///
/// Schema sync only creates single-column and unique indexes, so the
/// composite history index is created here.
pub async fn ensure_indexes(db: &DatabaseConnection) -> Result<(), DbErr> {
    // SELECT ... FROM revision WHERE post_kind = ? AND post_id = ? ORDER BY created_at DESC
    let stmt = Index::create()
        .if_not_exists()
        .name("idx_revision_post_created")
        .table(revision::Entity)
        .col(revision::Column::PostKind)
        .col(revision::Column::PostId)
        .col(revision::Column::CreatedAt)
        .to_owned();

    let backend = db.get_database_backend();
    match db.execute_raw(backend.build(&stmt)).await {
        Ok(_) => info!("Ensured index idx_revision_post_created exists"),
        Err(e) => warn!("Failed to create index idx_revision_post_created: {}", e),
    }

    Ok(())
}

use chrono::Utc;
use sea_orm::*;
use tracing::{info, instrument};

use crate::config::AccountConfig;
use crate::entity::{account, user_profile};
use crate::error::{CatalogError, ValidationFailure, map_unique_violation};
use crate::seed::ensure_sentinel_account;

fn username_taken() -> ValidationFailure {
    ValidationFailure::duplicate("Username is already taken.", &["username"])
}

/// Record an account and its profile. The identity collaborator calls this
/// once it has created the account on its side.
#[instrument(skip(db))]
pub async fn register_account<C: TransactionTrait>(
    db: &C,
    username: &str,
) -> Result<(account::Model, user_profile::Model), CatalogError> {
    let txn = db.begin().await?;
    let taken = account::Entity::find()
        .filter(account::Column::Username.eq(username))
        .one(&txn)
        .await?
        .is_some();
    if taken {
        return Err(username_taken().into());
    }

    let now = Utc::now();
    let account = account::ActiveModel {
        username: Set(username.to_string()),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| map_unique_violation(e, username_taken))?;

    let profile = user_profile::ActiveModel {
        account_id: Set(account.id),
        points: Set(0),
        created_at: Set(now),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    info!(account_id = account.id, "Registered account");
    Ok((account, profile))
}

/// Fetch or lazily create the account that inherits orphaned solutions.
pub async fn resolve_sentinel_account<C: ConnectionTrait>(
    db: &C,
    config: &AccountConfig,
) -> Result<account::Model, CatalogError> {
    Ok(ensure_sentinel_account(db, &config.sentinel_username).await?)
}

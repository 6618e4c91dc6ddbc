use chrono::Utc;
use sea_orm::*;
use tracing::{debug, instrument};

use crate::entity::{solution, user_profile, vote};
use crate::error::{CatalogError, map_unique_violation};
use crate::utils::lookup::find_user_profile;
use crate::validation::{duplicate_vote, validate_vote};

/// Tally change requested by one vote.
fn vote_weight(positive: bool) -> i32 {
    if positive { 1 } else { -1 }
}

/// Tallies are non-negative: a downvote on a zero-point record is absorbed.
fn adjusted(points: i32, delta: i32) -> i32 {
    Ord::max(points.saturating_add(delta), 0)
}

/// Changes actually made to the solution and author tallies.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
struct Applied {
    solution: i32,
    author: i32,
}

/// Cast a vote and update the denormalized tallies of the solution and of
/// its author's profile.
#[instrument(skip(db))]
pub async fn cast_vote<C: TransactionTrait>(
    db: &C,
    user_profile_id: i32,
    solution_id: i32,
    positive: bool,
) -> Result<vote::Model, CatalogError> {
    let txn = db.begin().await?;
    find_user_profile(&txn, user_profile_id).await?;
    let target = lock_solution(&txn, solution_id).await?;
    validate_vote(&txn, user_profile_id, solution_id).await?;

    let weight = vote_weight(positive);
    let applied = apply_tally(&txn, target, weight, weight).await?;

    let model = vote::ActiveModel {
        user_profile_id: Set(user_profile_id),
        solution_id: Set(solution_id),
        positive: Set(positive),
        applied: Set(applied.solution),
        author_applied: Set(applied.author),
        created_at: Set(Utc::now()),
    }
    .insert(&txn)
    .await
    .map_err(|e| map_unique_violation(e, duplicate_vote))?;

    txn.commit().await?;
    Ok(model)
}

/// Remove a vote and undo exactly the tally change it made.
#[instrument(skip(db))]
pub async fn retract_vote<C: TransactionTrait>(
    db: &C,
    user_profile_id: i32,
    solution_id: i32,
) -> Result<(), CatalogError> {
    let txn = db.begin().await?;
    let existing = vote::Entity::find_by_id((user_profile_id, solution_id))
        .lock_exclusive()
        .one(&txn)
        .await?
        .ok_or_else(|| {
            CatalogError::NotFound(format!(
                "Vote of profile {user_profile_id} on solution {solution_id}"
            ))
        })?;
    let target = lock_solution(&txn, solution_id).await?;

    vote::Entity::delete_by_id((user_profile_id, solution_id))
        .exec(&txn)
        .await?;
    apply_tally(&txn, target, -existing.applied, -existing.author_applied).await?;

    txn.commit().await?;
    Ok(())
}

/// Read a solution holding a row lock until the transaction ends, so
/// concurrent votes on it apply one after another.
async fn lock_solution<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<solution::Model, CatalogError> {
    solution::Entity::find_by_id(id)
        .lock_exclusive()
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Solution {id}")))
}

/// `target` must have been read with [`lock_solution`] in the same
/// transaction.
async fn apply_tally<C: ConnectionTrait>(
    db: &C,
    target: solution::Model,
    solution_delta: i32,
    author_delta: i32,
) -> Result<Applied, CatalogError> {
    let mut applied = Applied::default();

    let author_id = target.author_id;
    let points = adjusted(target.points, solution_delta);
    applied.solution = points - target.points;
    let mut active: solution::ActiveModel = target.into();
    active.points = Set(points);
    active.update(db).await?;

    let profile = user_profile::Entity::find()
        .filter(user_profile::Column::AccountId.eq(author_id))
        .lock_exclusive()
        .one(db)
        .await?;
    if let Some(profile) = profile {
        let points = adjusted(profile.points, author_delta);
        applied.author = points - profile.points;
        let mut active: user_profile::ActiveModel = profile.into();
        active.points = Set(points);
        active.update(db).await?;
    } else {
        debug!(author_id, "Solution author has no profile; skipping profile tally");
    }

    Ok(applied)
}

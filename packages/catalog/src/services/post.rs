use chrono::Utc;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{exercise, solution};
use crate::error::{CatalogError, map_unique_violation};
use crate::models::post::{NewExercise, NewSolution, validate_revision_text};
use crate::revision::HasRevisionHistory;
use crate::utils::lookup::{find_account, find_exercise, find_exercise_set};
use crate::validation::{duplicate_exercise, validate_exercise};

/// Create an exercise together with its first revision.
#[instrument(skip(db, new), fields(exercise_set_id = new.exercise_set_id, number = new.number))]
pub async fn create_exercise<C: TransactionTrait>(
    db: &C,
    new: NewExercise,
) -> Result<exercise::Model, CatalogError> {
    validate_revision_text(&new.text)?;

    let txn = db.begin().await?;
    find_exercise_set(&txn, new.exercise_set_id).await?;
    validate_exercise(&txn, new.exercise_set_id, new.number, None).await?;

    let model = exercise::ActiveModel {
        exercise_set_id: Set(new.exercise_set_id),
        number: Set(new.number),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await
    .map_err(|e| map_unique_violation(e, duplicate_exercise))?;
    model.append_revision(&txn, &new.text).await?;

    txn.commit().await?;
    info!(exercise_id = model.id, "Created exercise");
    Ok(model)
}

/// Move an exercise to a different number within its set.
#[instrument(skip(db))]
pub async fn renumber_exercise<C: TransactionTrait>(
    db: &C,
    id: i32,
    number: i32,
) -> Result<exercise::Model, CatalogError> {
    let txn = db.begin().await?;
    let existing = find_exercise(&txn, id).await?;
    validate_exercise(&txn, existing.exercise_set_id, number, Some(id)).await?;

    let mut active: exercise::ActiveModel = existing.into();
    active.number = Set(number);
    let model = active
        .update(&txn)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_exercise))?;

    txn.commit().await?;
    Ok(model)
}

/// Exercises of a set, ordered by number.
pub async fn list_exercises<C: ConnectionTrait>(
    db: &C,
    exercise_set_id: i32,
) -> Result<Vec<exercise::Model>, CatalogError> {
    Ok(exercise::Entity::find()
        .filter(exercise::Column::ExerciseSetId.eq(exercise_set_id))
        .order_by_asc(exercise::Column::Number)
        .all(db)
        .await?)
}

/// Create a solution for an exercise together with its first revision.
#[instrument(skip(db, new), fields(exercise_id = new.exercise_id, author_id = new.author_id))]
pub async fn create_solution<C: TransactionTrait>(
    db: &C,
    new: NewSolution,
) -> Result<solution::Model, CatalogError> {
    validate_revision_text(&new.text)?;

    let txn = db.begin().await?;
    find_exercise(&txn, new.exercise_id).await?;
    find_account(&txn, new.author_id).await?;

    let model = solution::ActiveModel {
        exercise_id: Set(new.exercise_id),
        author_id: Set(new.author_id),
        points: Set(0),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;
    model.append_revision(&txn, &new.text).await?;

    txn.commit().await?;
    info!(solution_id = model.id, "Created solution");
    Ok(model)
}

/// Solutions of an exercise, best rated first.
pub async fn list_solutions<C: ConnectionTrait>(
    db: &C,
    exercise_id: i32,
) -> Result<Vec<solution::Model>, CatalogError> {
    Ok(solution::Entity::find()
        .filter(solution::Column::ExerciseId.eq(exercise_id))
        .order_by_desc(solution::Column::Points)
        .order_by_asc(solution::Column::Id)
        .all(db)
        .await?)
}

use chrono::Utc;
use common::{ExerciseSetKind, HasAcademicTerm};
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::{info, instrument};

use crate::entity::{exam, exercise_set, final_exam, practice, subject};
use crate::error::{CatalogError, map_unique_violation};
use crate::models::exercise_set::{ExerciseSetDetail, NewExam, NewFinalExam, NewPractice};
use crate::utils::lookup::{find_subject, load_exercise_set_detail};
use crate::validation::{
    duplicate_exam, duplicate_final_exam, duplicate_practice, validate_exam, validate_final_exam,
    validate_practice,
};

/// Create a subject.
pub async fn create_subject<C: ConnectionTrait>(db: &C) -> Result<subject::Model, CatalogError> {
    let model = subject::ActiveModel {
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;

    info!(subject_id = model.id, "Created subject");
    Ok(model)
}

/// All exercise sets of a subject with their variant attributes, oldest first.
pub async fn list_exercise_sets<C: ConnectionTrait>(
    db: &C,
    subject_id: i32,
) -> Result<Vec<ExerciseSetDetail>, CatalogError> {
    let sets = exercise_set::Entity::find()
        .filter(exercise_set::Column::SubjectId.eq(subject_id))
        .order_by_asc(exercise_set::Column::Id)
        .all(db)
        .await?;

    let mut details = Vec::with_capacity(sets.len());
    for set in &sets {
        details.push(load_exercise_set_detail(db, set).await?);
    }
    Ok(details)
}

async fn insert_exercise_set<C: ConnectionTrait>(
    db: &C,
    subject_id: i32,
    kind: ExerciseSetKind,
) -> Result<exercise_set::Model, CatalogError> {
    find_subject(db, subject_id).await?;
    let model = exercise_set::ActiveModel {
        subject_id: Set(subject_id),
        kind: Set(kind),
        created_at: Set(Utc::now()),
        ..Default::default()
    }
    .insert(db)
    .await?;
    Ok(model)
}

/// Keep the shared row's subject in step with the variant's.
async fn move_exercise_set<C: ConnectionTrait>(
    db: &C,
    id: i32,
    subject_id: i32,
) -> Result<(), CatalogError> {
    find_subject(db, subject_id).await?;
    exercise_set::Entity::update_many()
        .col_expr(exercise_set::Column::SubjectId, Expr::value(subject_id))
        .filter(exercise_set::Column::Id.eq(id))
        .exec(db)
        .await?;
    Ok(())
}

#[instrument(skip(db, new), fields(subject_id = new.subject_id, term = %new.academic_term(), number = new.number))]
pub async fn create_practice<C: TransactionTrait>(
    db: &C,
    new: NewPractice,
) -> Result<practice::Model, CatalogError> {
    let txn = db.begin().await?;
    validate_practice(&txn, &new, None).await?;

    let set = insert_exercise_set(&txn, new.subject_id, ExerciseSetKind::Practice).await?;
    let model = practice::ActiveModel {
        id: Set(set.id),
        subject_id: Set(new.subject_id),
        year: Set(new.year),
        term: Set(new.term),
        number: Set(new.number),
        title: Set(new.title),
        created_at: Set(set.created_at),
    }
    .insert(&txn)
    .await
    .map_err(|e| map_unique_violation(e, duplicate_practice))?;

    txn.commit().await?;
    info!(practice_id = model.id, "Created practice");
    Ok(model)
}

#[instrument(skip(db, new), fields(subject_id = new.subject_id, term = %new.academic_term()))]
pub async fn update_practice<C: TransactionTrait>(
    db: &C,
    id: i32,
    new: NewPractice,
) -> Result<practice::Model, CatalogError> {
    let txn = db.begin().await?;
    let existing = practice::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Practice {id}")))?;
    validate_practice(&txn, &new, Some(id)).await?;

    if existing.subject_id != new.subject_id {
        move_exercise_set(&txn, id, new.subject_id).await?;
    }

    let mut active: practice::ActiveModel = existing.into();
    active.subject_id = Set(new.subject_id);
    active.year = Set(new.year);
    active.term = Set(new.term);
    active.number = Set(new.number);
    active.title = Set(new.title);

    let model = active
        .update(&txn)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_practice))?;
    txn.commit().await?;
    Ok(model)
}

#[instrument(skip(db, new), fields(subject_id = new.subject_id, term = %new.academic_term(), number = new.number))]
pub async fn create_exam<C: TransactionTrait>(
    db: &C,
    new: NewExam,
) -> Result<exam::Model, CatalogError> {
    let txn = db.begin().await?;
    validate_exam(&txn, &new, None).await?;

    let set = insert_exercise_set(&txn, new.subject_id, ExerciseSetKind::Exam).await?;
    let model = exam::ActiveModel {
        id: Set(set.id),
        subject_id: Set(new.subject_id),
        year: Set(new.year),
        term: Set(new.term),
        number: Set(new.number),
        is_makeup: Set(new.is_makeup),
        date: Set(new.date),
        created_at: Set(set.created_at),
    }
    .insert(&txn)
    .await
    .map_err(|e| map_unique_violation(e, duplicate_exam))?;

    txn.commit().await?;
    info!(exam_id = model.id, is_makeup = model.is_makeup, "Created exam");
    Ok(model)
}

#[instrument(skip(db, new), fields(subject_id = new.subject_id, term = %new.academic_term()))]
pub async fn update_exam<C: TransactionTrait>(
    db: &C,
    id: i32,
    new: NewExam,
) -> Result<exam::Model, CatalogError> {
    let txn = db.begin().await?;
    let existing = exam::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Exam {id}")))?;
    validate_exam(&txn, &new, Some(id)).await?;

    if existing.subject_id != new.subject_id {
        move_exercise_set(&txn, id, new.subject_id).await?;
    }

    let mut active: exam::ActiveModel = existing.into();
    active.subject_id = Set(new.subject_id);
    active.year = Set(new.year);
    active.term = Set(new.term);
    active.number = Set(new.number);
    active.is_makeup = Set(new.is_makeup);
    active.date = Set(new.date);

    let model = active
        .update(&txn)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_exam))?;
    txn.commit().await?;
    Ok(model)
}

#[instrument(skip(db, new), fields(subject_id = new.subject_id, date = %new.date))]
pub async fn create_final_exam<C: TransactionTrait>(
    db: &C,
    new: NewFinalExam,
) -> Result<final_exam::Model, CatalogError> {
    let txn = db.begin().await?;
    validate_final_exam(&txn, &new, None).await?;

    let set = insert_exercise_set(&txn, new.subject_id, ExerciseSetKind::FinalExam).await?;
    let model = final_exam::ActiveModel {
        id: Set(set.id),
        subject_id: Set(new.subject_id),
        date: Set(new.date),
        created_at: Set(set.created_at),
    }
    .insert(&txn)
    .await
    .map_err(|e| map_unique_violation(e, duplicate_final_exam))?;

    txn.commit().await?;
    info!(final_exam_id = model.id, "Created final exam");
    Ok(model)
}

#[instrument(skip(db, new), fields(subject_id = new.subject_id, date = %new.date))]
pub async fn update_final_exam<C: TransactionTrait>(
    db: &C,
    id: i32,
    new: NewFinalExam,
) -> Result<final_exam::Model, CatalogError> {
    let txn = db.begin().await?;
    let existing = final_exam::Entity::find_by_id(id)
        .one(&txn)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Final exam {id}")))?;
    validate_final_exam(&txn, &new, Some(id)).await?;

    if existing.subject_id != new.subject_id {
        move_exercise_set(&txn, id, new.subject_id).await?;
    }

    let mut active: final_exam::ActiveModel = existing.into();
    active.subject_id = Set(new.subject_id);
    active.date = Set(new.date);

    let model = active
        .update(&txn)
        .await
        .map_err(|e| map_unique_violation(e, duplicate_final_exam))?;
    txn.commit().await?;
    Ok(model)
}

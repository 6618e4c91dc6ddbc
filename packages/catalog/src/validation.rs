//! Uniqueness checks run before a write is committed.
//!
//! Each check takes the id of the record being updated (if any) so that a
//! record never collides with itself. The database enforces the same keys,
//! so a racing insert that slips past a check is still rejected at commit.

use sea_orm::*;

use crate::entity::{exam, exercise, final_exam, practice, vote};
use crate::error::{CatalogError, ValidationFailure};
use crate::models::exercise_set::{NewExam, NewFinalExam, NewPractice};

pub const PRACTICE_FIELDS: &[&str] = &["subject", "year", "term", "number"];
pub const EXAM_FIELDS: &[&str] = &["subject", "year", "term", "number", "is_makeup"];
pub const FINAL_EXAM_FIELDS: &[&str] = &["subject", "date"];
pub const EXERCISE_FIELDS: &[&str] = &["exercise_set", "number"];
pub const VOTE_FIELDS: &[&str] = &["user_profile", "solution"];

pub fn duplicate_practice() -> ValidationFailure {
    ValidationFailure::duplicate(
        "A Practice with these attributes already exists.",
        PRACTICE_FIELDS,
    )
}

pub fn duplicate_exam() -> ValidationFailure {
    ValidationFailure::duplicate("An Exam with these attributes already exists.", EXAM_FIELDS)
}

pub fn duplicate_final_exam() -> ValidationFailure {
    ValidationFailure::duplicate(
        "A Final Exam with this subject and date already exists.",
        FINAL_EXAM_FIELDS,
    )
}

pub fn duplicate_exercise() -> ValidationFailure {
    ValidationFailure::duplicate(
        "An Exercise with this number already exists in the set.",
        EXERCISE_FIELDS,
    )
}

pub fn duplicate_vote() -> ValidationFailure {
    ValidationFailure::duplicate("This user already voted on this solution.", VOTE_FIELDS)
}

pub async fn validate_practice<C: ConnectionTrait>(
    db: &C,
    candidate: &NewPractice,
    exclude_id: Option<i32>,
) -> Result<(), CatalogError> {
    let mut query = practice::Entity::find()
        .filter(practice::Column::SubjectId.eq(candidate.subject_id))
        .filter(practice::Column::Year.eq(candidate.year))
        .filter(practice::Column::Term.eq(candidate.term))
        .filter(practice::Column::Number.eq(candidate.number));
    if let Some(id) = exclude_id {
        query = query.filter(practice::Column::Id.ne(id));
    }

    if query.one(db).await?.is_some() {
        return Err(duplicate_practice().into());
    }
    Ok(())
}

pub async fn validate_exam<C: ConnectionTrait>(
    db: &C,
    candidate: &NewExam,
    exclude_id: Option<i32>,
) -> Result<(), CatalogError> {
    let mut query = exam::Entity::find()
        .filter(exam::Column::SubjectId.eq(candidate.subject_id))
        .filter(exam::Column::Year.eq(candidate.year))
        .filter(exam::Column::Term.eq(candidate.term))
        .filter(exam::Column::Number.eq(candidate.number))
        .filter(exam::Column::IsMakeup.eq(candidate.is_makeup));
    if let Some(id) = exclude_id {
        query = query.filter(exam::Column::Id.ne(id));
    }

    if query.one(db).await?.is_some() {
        return Err(duplicate_exam().into());
    }
    Ok(())
}

pub async fn validate_final_exam<C: ConnectionTrait>(
    db: &C,
    candidate: &NewFinalExam,
    exclude_id: Option<i32>,
) -> Result<(), CatalogError> {
    let mut query = final_exam::Entity::find()
        .filter(final_exam::Column::SubjectId.eq(candidate.subject_id))
        .filter(final_exam::Column::Date.eq(candidate.date));
    if let Some(id) = exclude_id {
        query = query.filter(final_exam::Column::Id.ne(id));
    }

    if query.one(db).await?.is_some() {
        return Err(duplicate_final_exam().into());
    }
    Ok(())
}

pub async fn validate_exercise<C: ConnectionTrait>(
    db: &C,
    exercise_set_id: i32,
    number: i32,
    exclude_id: Option<i32>,
) -> Result<(), CatalogError> {
    let mut query = exercise::Entity::find()
        .filter(exercise::Column::ExerciseSetId.eq(exercise_set_id))
        .filter(exercise::Column::Number.eq(number));
    if let Some(id) = exclude_id {
        query = query.filter(exercise::Column::Id.ne(id));
    }

    if query.one(db).await?.is_some() {
        return Err(duplicate_exercise().into());
    }
    Ok(())
}

pub async fn validate_vote<C: ConnectionTrait>(
    db: &C,
    user_profile_id: i32,
    solution_id: i32,
) -> Result<(), CatalogError> {
    let existing = vote::Entity::find_by_id((user_profile_id, solution_id))
        .one(db)
        .await?;
    if existing.is_some() {
        return Err(duplicate_vote().into());
    }
    Ok(())
}

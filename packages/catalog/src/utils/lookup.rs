use common::ExerciseSetKind;
use sea_orm::{ColumnTrait, ConnectionTrait, EntityTrait, QueryFilter};

use crate::entity::{
    account, exam, exercise, exercise_set, final_exam, practice, solution, subject, user_profile,
};
use crate::error::CatalogError;
use crate::models::exercise_set::ExerciseSetDetail;

/// Look up a subject by ID, returning `NotFound` if missing.
pub async fn find_subject<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<subject::Model, CatalogError> {
    subject::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Subject {id}")))
}

pub async fn find_exercise_set<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<exercise_set::Model, CatalogError> {
    exercise_set::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Exercise set {id}")))
}

/// Load the variant record behind an exercise set row.
pub async fn load_exercise_set_detail<C: ConnectionTrait>(
    db: &C,
    set: &exercise_set::Model,
) -> Result<ExerciseSetDetail, CatalogError> {
    let missing = || CatalogError::NotFound(format!("{} {}", set.kind, set.id));
    let detail = match set.kind {
        ExerciseSetKind::Practice => ExerciseSetDetail::Practice(
            practice::Entity::find_by_id(set.id)
                .one(db)
                .await?
                .ok_or_else(missing)?,
        ),
        ExerciseSetKind::Exam => ExerciseSetDetail::Exam(
            exam::Entity::find_by_id(set.id)
                .one(db)
                .await?
                .ok_or_else(missing)?,
        ),
        ExerciseSetKind::FinalExam => ExerciseSetDetail::FinalExam(
            final_exam::Entity::find_by_id(set.id)
                .one(db)
                .await?
                .ok_or_else(missing)?,
        ),
    };
    Ok(detail)
}

pub async fn find_exercise<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<exercise::Model, CatalogError> {
    exercise::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Exercise {id}")))
}

pub async fn find_solution<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<solution::Model, CatalogError> {
    solution::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Solution {id}")))
}

pub async fn find_account<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<account::Model, CatalogError> {
    account::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("Account {id}")))
}

pub async fn find_user_profile<C: ConnectionTrait>(
    db: &C,
    id: i32,
) -> Result<user_profile::Model, CatalogError> {
    user_profile::Entity::find_by_id(id)
        .one(db)
        .await?
        .ok_or_else(|| CatalogError::NotFound(format!("User profile {id}")))
}

/// Profile attached to an account, if the account has one.
pub async fn profile_of_account<C: ConnectionTrait>(
    db: &C,
    account_id: i32,
) -> Result<Option<user_profile::Model>, CatalogError> {
    Ok(user_profile::Entity::find()
        .filter(user_profile::Column::AccountId.eq(account_id))
        .one(db)
        .await?)
}

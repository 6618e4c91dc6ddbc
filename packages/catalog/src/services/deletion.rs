//! Deletes that follow the per-relationship [`DeletePolicy`].
//!
//! Dependents are removed explicitly, children before parents, inside one
//! transaction. The behavior is identical on every backend and does not rely
//! on `ON DELETE` clauses in the schema.

use common::{DeletePolicy, PostKind};
use sea_orm::prelude::Expr;
use sea_orm::*;
use tracing::{info, instrument};

use crate::config::AccountConfig;
use crate::entity::{
    account, exam, exercise, exercise_set, final_exam, practice, solution, subject, user_profile,
    vote,
};
use crate::error::CatalogError;
use crate::revision::delete_revisions;
use crate::seed::ensure_sentinel_account;
use crate::utils::lookup::{
    find_account, find_exercise, find_exercise_set, find_solution, find_subject,
    profile_of_account,
};

/// A foreign relationship between two record types, named parent first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Relationship {
    SubjectExerciseSets,
    ExerciseSetVariant,
    ExerciseSetExercises,
    ExerciseSolutions,
    PostRevisions,
    SolutionVotes,
    ProfileVotes,
    AccountProfile,
    SolutionAuthor,
}

impl Relationship {
    pub const ALL: &'static [Relationship] = &[
        Self::SubjectExerciseSets,
        Self::ExerciseSetVariant,
        Self::ExerciseSetExercises,
        Self::ExerciseSolutions,
        Self::PostRevisions,
        Self::SolutionVotes,
        Self::ProfileVotes,
        Self::AccountProfile,
        Self::SolutionAuthor,
    ];

    /// What happens to the dependent side when the parent is deleted.
    pub fn on_delete(self) -> DeletePolicy {
        match self {
            Self::SolutionAuthor => DeletePolicy::ReassignToSentinel,
            _ => DeletePolicy::Cascade,
        }
    }
}

/// Rows touched by a delete.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DeleteSummary {
    pub subjects: u64,
    pub exercise_sets: u64,
    pub exercises: u64,
    pub solutions: u64,
    pub revisions: u64,
    pub votes: u64,
    pub profiles: u64,
    pub accounts: u64,
    /// Solutions kept but re-pointed at the sentinel account.
    pub reassigned_solutions: u64,
}

#[instrument(skip(db))]
pub async fn delete_subject<C: TransactionTrait>(
    db: &C,
    subject_id: i32,
) -> Result<DeleteSummary, CatalogError> {
    let txn = db.begin().await?;
    find_subject(&txn, subject_id).await?;

    let mut summary = DeleteSummary::default();
    let set_ids: Vec<i32> = exercise_set::Entity::find()
        .filter(exercise_set::Column::SubjectId.eq(subject_id))
        .select_only()
        .column(exercise_set::Column::Id)
        .into_tuple()
        .all(&txn)
        .await?;
    remove_exercise_sets(&txn, set_ids, &mut summary).await?;

    summary.subjects = subject::Entity::delete_by_id(subject_id)
        .exec(&txn)
        .await?
        .rows_affected;

    txn.commit().await?;
    info!(?summary, "Deleted subject");
    Ok(summary)
}

#[instrument(skip(db))]
pub async fn delete_exercise_set<C: TransactionTrait>(
    db: &C,
    exercise_set_id: i32,
) -> Result<DeleteSummary, CatalogError> {
    let txn = db.begin().await?;
    find_exercise_set(&txn, exercise_set_id).await?;

    let mut summary = DeleteSummary::default();
    remove_exercise_sets(&txn, vec![exercise_set_id], &mut summary).await?;

    txn.commit().await?;
    info!(?summary, "Deleted exercise set");
    Ok(summary)
}

#[instrument(skip(db))]
pub async fn delete_exercise<C: TransactionTrait>(
    db: &C,
    exercise_id: i32,
) -> Result<DeleteSummary, CatalogError> {
    let txn = db.begin().await?;
    find_exercise(&txn, exercise_id).await?;

    let mut summary = DeleteSummary::default();
    remove_exercises(&txn, vec![exercise_id], &mut summary).await?;

    txn.commit().await?;
    info!(?summary, "Deleted exercise");
    Ok(summary)
}

#[instrument(skip(db))]
pub async fn delete_solution<C: TransactionTrait>(
    db: &C,
    solution_id: i32,
) -> Result<DeleteSummary, CatalogError> {
    let txn = db.begin().await?;
    find_solution(&txn, solution_id).await?;

    let mut summary = DeleteSummary::default();
    remove_solutions(&txn, vec![solution_id], &mut summary).await?;

    txn.commit().await?;
    info!(?summary, "Deleted solution");
    Ok(summary)
}

/// Delete an account. Its solutions survive under the sentinel account;
/// its profile and the profile's votes are removed.
///
/// Tallies earned from the removed votes are left as they are.
#[instrument(skip(db, config))]
pub async fn delete_account<C: TransactionTrait>(
    db: &C,
    account_id: i32,
    config: &AccountConfig,
) -> Result<DeleteSummary, CatalogError> {
    let txn = db.begin().await?;
    let target = find_account(&txn, account_id).await?;
    if target.username == config.sentinel_username {
        return Err(CatalogError::Protected(format!(
            "Account '{}' is the sentinel account",
            target.username
        )));
    }

    let mut summary = DeleteSummary::default();
    match Relationship::SolutionAuthor.on_delete() {
        DeletePolicy::ReassignToSentinel => {
            let sentinel = ensure_sentinel_account(&txn, &config.sentinel_username).await?;
            summary.reassigned_solutions = solution::Entity::update_many()
                .col_expr(solution::Column::AuthorId, Expr::value(sentinel.id))
                .filter(solution::Column::AuthorId.eq(account_id))
                .exec(&txn)
                .await?
                .rows_affected;
        }
        DeletePolicy::Cascade => {
            let authored: Vec<i32> = solution::Entity::find()
                .filter(solution::Column::AuthorId.eq(account_id))
                .select_only()
                .column(solution::Column::Id)
                .into_tuple()
                .all(&txn)
                .await?;
            remove_solutions(&txn, authored, &mut summary).await?;
        }
    }

    if let Some(profile) = profile_of_account(&txn, account_id).await? {
        summary.votes += vote::Entity::delete_many()
            .filter(vote::Column::UserProfileId.eq(profile.id))
            .exec(&txn)
            .await?
            .rows_affected;
        summary.profiles = user_profile::Entity::delete_by_id(profile.id)
            .exec(&txn)
            .await?
            .rows_affected;
    }

    summary.accounts = account::Entity::delete_by_id(account_id)
        .exec(&txn)
        .await?
        .rows_affected;

    txn.commit().await?;
    info!(?summary, "Deleted account");
    Ok(summary)
}

async fn remove_exercise_sets<C: ConnectionTrait>(
    db: &C,
    set_ids: Vec<i32>,
    summary: &mut DeleteSummary,
) -> Result<(), CatalogError> {
    if set_ids.is_empty() {
        return Ok(());
    }

    let exercise_ids: Vec<i32> = exercise::Entity::find()
        .filter(exercise::Column::ExerciseSetId.is_in(set_ids.clone()))
        .select_only()
        .column(exercise::Column::Id)
        .into_tuple()
        .all(db)
        .await?;
    remove_exercises(db, exercise_ids, summary).await?;

    practice::Entity::delete_many()
        .filter(practice::Column::Id.is_in(set_ids.clone()))
        .exec(db)
        .await?;
    exam::Entity::delete_many()
        .filter(exam::Column::Id.is_in(set_ids.clone()))
        .exec(db)
        .await?;
    final_exam::Entity::delete_many()
        .filter(final_exam::Column::Id.is_in(set_ids.clone()))
        .exec(db)
        .await?;
    summary.exercise_sets += exercise_set::Entity::delete_many()
        .filter(exercise_set::Column::Id.is_in(set_ids))
        .exec(db)
        .await?
        .rows_affected;

    Ok(())
}

async fn remove_exercises<C: ConnectionTrait>(
    db: &C,
    exercise_ids: Vec<i32>,
    summary: &mut DeleteSummary,
) -> Result<(), CatalogError> {
    if exercise_ids.is_empty() {
        return Ok(());
    }

    let solution_ids: Vec<i32> = solution::Entity::find()
        .filter(solution::Column::ExerciseId.is_in(exercise_ids.clone()))
        .select_only()
        .column(solution::Column::Id)
        .into_tuple()
        .all(db)
        .await?;
    remove_solutions(db, solution_ids, summary).await?;

    summary.revisions += delete_revisions(db, PostKind::Exercise, exercise_ids.clone()).await?;
    summary.exercises += exercise::Entity::delete_many()
        .filter(exercise::Column::Id.is_in(exercise_ids))
        .exec(db)
        .await?
        .rows_affected;

    Ok(())
}

async fn remove_solutions<C: ConnectionTrait>(
    db: &C,
    solution_ids: Vec<i32>,
    summary: &mut DeleteSummary,
) -> Result<(), CatalogError> {
    if solution_ids.is_empty() {
        return Ok(());
    }

    summary.votes += vote::Entity::delete_many()
        .filter(vote::Column::SolutionId.is_in(solution_ids.clone()))
        .exec(db)
        .await?
        .rows_affected;
    summary.revisions += delete_revisions(db, PostKind::Solution, solution_ids.clone()).await?;
    summary.solutions += solution::Entity::delete_many()
        .filter(solution::Column::Id.is_in(solution_ids))
        .exec(db)
        .await?
        .rows_affected;

    Ok(())
}

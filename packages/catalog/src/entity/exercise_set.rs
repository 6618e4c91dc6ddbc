use common::ExerciseSetKind;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Shared identity of a practice, exam or final exam.
///
/// The variant row lives in the table named by `kind` under the same id.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise_set")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub subject_id: i32,
    #[sea_orm(belongs_to, from = "subject_id", to = "id")]
    pub subject: HasOne<super::subject::Entity>,

    pub kind: ExerciseSetKind,

    #[sea_orm(has_many)]
    pub exercises: HasMany<super::exercise::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "final_exam")]
pub struct Model {
    /// Same id as the owning `exercise_set` row.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(belongs_to, from = "id", to = "id")]
    pub exercise_set: HasOne<super::exercise_set::Entity>,

    #[sea_orm(unique_key = "final_exam_identity")]
    pub subject_id: i32,
    #[sea_orm(unique_key = "final_exam_identity")]
    pub date: Date,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A course. Owns the exercise sets published for it.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "subject")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(has_many)]
    pub exercise_sets: HasMany<super::exercise_set::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

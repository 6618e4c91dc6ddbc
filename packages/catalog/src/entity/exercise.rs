use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// A numbered problem statement. Its text lives in the revision history.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exercise")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique_key = "exercise_set_number")]
    pub exercise_set_id: i32,
    #[sea_orm(belongs_to, from = "exercise_set_id", to = "id")]
    pub exercise_set: HasOne<super::exercise_set::Entity>,

    /// Position of the exercise within its set. Listings sort by this.
    #[sea_orm(unique_key = "exercise_set_number")]
    pub number: i32,

    #[sea_orm(has_many)]
    pub solutions: HasMany<super::solution::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

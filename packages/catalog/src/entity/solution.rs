use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "solution")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(indexed)]
    pub exercise_id: i32,
    #[sea_orm(belongs_to, from = "exercise_id", to = "id")]
    pub exercise: HasOne<super::exercise::Entity>,

    /// Re-pointed at the sentinel account when the author is deleted.
    #[sea_orm(indexed)]
    pub author_id: i32,
    #[sea_orm(belongs_to, from = "author_id", to = "id")]
    pub author: HasOne<super::account::Entity>,

    /// Denormalized vote tally, never negative.
    #[sea_orm(default_value = 0)]
    pub points: i32,

    #[sea_orm(has_many, via = "vote")]
    pub voters: HasMany<super::user_profile::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

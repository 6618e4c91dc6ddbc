use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Minimal account record owned by the identity collaborator.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "account")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(unique)]
    pub username: String,

    #[sea_orm(has_one)]
    pub profile: HasOne<super::user_profile::Entity>,

    #[sea_orm(has_many)]
    pub solutions: HasMany<super::solution::Entity>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

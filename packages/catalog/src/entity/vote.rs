use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// One user's vote on one solution. The composite key allows a single vote
/// per pair.
#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "vote")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub user_profile_id: i32,
    #[sea_orm(primary_key)]
    pub solution_id: i32,
    #[sea_orm(belongs_to, from = "user_profile_id", to = "id")]
    pub user_profile: HasOne<super::user_profile::Entity>,
    #[sea_orm(belongs_to, from = "solution_id", to = "id")]
    pub solution: HasOne<super::solution::Entity>,

    pub positive: bool,
    /// Change this vote made to the solution's tally once the zero floor
    /// was applied. Retracting subtracts exactly this.
    #[sea_orm(default_value = 0)]
    pub applied: i32,
    /// Same, for the author's profile tally.
    #[sea_orm(default_value = 0)]
    pub author_applied: i32,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

use common::{AcademicTerm, HasAcademicTerm, Term};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "practice")]
pub struct Model {
    /// Same id as the owning `exercise_set` row.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(belongs_to, from = "id", to = "id")]
    pub exercise_set: HasOne<super::exercise_set::Entity>,

    #[sea_orm(unique_key = "practice_identity")]
    pub subject_id: i32,
    #[sea_orm(unique_key = "practice_identity")]
    pub year: i32,
    #[sea_orm(unique_key = "practice_identity")]
    pub term: Term,
    #[sea_orm(unique_key = "practice_identity")]
    pub number: i32,

    pub title: Option<String>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

impl HasAcademicTerm for Model {
    fn academic_term(&self) -> AcademicTerm {
        AcademicTerm::new(self.year, self.term)
    }
}

use common::{AcademicTerm, HasAcademicTerm, Ordinal, Term, resolve_ordinal};
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[sea_orm::model]
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exam")]
pub struct Model {
    /// Same id as the owning `exercise_set` row.
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: i32,
    #[sea_orm(belongs_to, from = "id", to = "id")]
    pub exercise_set: HasOne<super::exercise_set::Entity>,

    #[sea_orm(unique_key = "exam_identity")]
    pub subject_id: i32,
    #[sea_orm(unique_key = "exam_identity")]
    pub year: i32,
    #[sea_orm(unique_key = "exam_identity")]
    pub term: Term,
    #[sea_orm(unique_key = "exam_identity")]
    pub number: i32,
    /// A makeup shares its number with the regular exam it replaces.
    #[sea_orm(unique_key = "exam_identity", default_value = false)]
    pub is_makeup: bool,

    pub date: Option<Date>,

    pub created_at: DateTimeUtc,
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Ordinal name of this exam's number, e.g. "First" / "Firsts".
    pub fn ordinal(&self) -> Ordinal {
        resolve_ordinal(self.number)
    }
}

impl HasAcademicTerm for Model {
    fn academic_term(&self) -> AcademicTerm {
        AcademicTerm::new(self.year, self.term)
    }
}

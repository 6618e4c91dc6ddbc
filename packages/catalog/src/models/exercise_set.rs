use common::{AcademicTerm, HasAcademicTerm, Term};
use sea_orm::prelude::Date;
use serde::{Deserialize, Serialize};

use crate::entity::{exam, final_exam, practice};

#[derive(Debug, Clone, Deserialize)]
pub struct NewPractice {
    pub subject_id: i32,
    pub year: i32,
    pub term: Term,
    pub number: i32,
    pub title: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewExam {
    pub subject_id: i32,
    pub year: i32,
    pub term: Term,
    pub number: i32,
    pub date: Option<Date>,
    #[serde(default)]
    pub is_makeup: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewFinalExam {
    pub subject_id: i32,
    pub date: Date,
}

impl HasAcademicTerm for NewPractice {
    fn academic_term(&self) -> AcademicTerm {
        AcademicTerm::new(self.year, self.term)
    }
}

impl HasAcademicTerm for NewExam {
    fn academic_term(&self) -> AcademicTerm {
        AcademicTerm::new(self.year, self.term)
    }
}

/// An exercise set together with its variant attributes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind")]
pub enum ExerciseSetDetail {
    Practice(practice::Model),
    Exam(exam::Model),
    FinalExam(final_exam::Model),
}

#[cfg(feature = "sea-orm")]
use sea_orm::prelude::StringLen;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Variant of an exercise set. Stored on the shared `exercise_set` row so an
/// exercise can find which variant table holds its set's attributes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "PascalCase")]
pub enum ExerciseSetKind {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Practice"))]
    Practice,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Exam"))]
    Exam,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "FinalExam"))]
    FinalExam,
}

impl ExerciseSetKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Practice => "Practice",
            Self::Exam => "Exam",
            Self::FinalExam => "FinalExam",
        }
    }
}

impl fmt::Display for ExerciseSetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Kind of record that owns a revision history.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "String", db_type = "String(StringLen::None)")
)]
#[serde(rename_all = "PascalCase")]
pub enum PostKind {
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Exercise"))]
    Exercise,
    #[cfg_attr(feature = "sea-orm", sea_orm(string_value = "Solution"))]
    Solution,
}

impl PostKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exercise => "Exercise",
            Self::Solution => "Solution",
        }
    }
}

impl fmt::Display for PostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What happens to dependent records when the record they reference is
/// deleted.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DeletePolicy {
    /// Dependents are deleted along with the referenced record.
    Cascade,
    /// Dependents are kept and re-pointed at the reserved sentinel account.
    ReassignToSentinel,
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Academic period within a year.
///
/// Stored as an integer column (`0` summer, `1` first, `2` second) when the
/// `sea-orm` feature is enabled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(
    feature = "sea-orm",
    derive(sea_orm::DeriveActiveEnum, sea_orm::EnumIter),
    sea_orm(rs_type = "i32", db_type = "Integer")
)]
#[serde(rename_all = "PascalCase")]
pub enum Term {
    #[cfg_attr(feature = "sea-orm", sea_orm(num_value = 0))]
    Summer,
    #[cfg_attr(feature = "sea-orm", sea_orm(num_value = 1))]
    First,
    #[cfg_attr(feature = "sea-orm", sea_orm(num_value = 2))]
    Second,
}

impl Term {
    pub const ALL: &'static [Term] = &[Self::Summer, Self::First, Self::Second];

    /// Identifier form, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::First => "First",
            Self::Second => "Second",
        }
    }

    /// Human-readable name used when rendering exercise sets.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Summer => "Summer",
            Self::First => "First Term",
            Self::Second => "Second Term",
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error when parsing an invalid term string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid term '{invalid}'. Valid values: Summer, First, Second")]
pub struct ParseTermError {
    invalid: String,
}

impl FromStr for Term {
    type Err = ParseTermError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Summer" => Ok(Self::Summer),
            "First" => Ok(Self::First),
            "Second" => Ok(Self::Second),
            _ => Err(ParseTermError {
                invalid: s.to_string(),
            }),
        }
    }
}

/// A year plus its term. Shared by every exercise set that is tied to an
/// academic period.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AcademicTerm {
    pub year: i32,
    pub term: Term,
}

impl AcademicTerm {
    pub fn new(year: i32, term: Term) -> Self {
        Self { year, term }
    }
}

impl fmt::Display for AcademicTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} of {}", self.term.name(), self.year)
    }
}

/// Records that belong to a specific year and term.
pub trait HasAcademicTerm {
    fn academic_term(&self) -> AcademicTerm;
}

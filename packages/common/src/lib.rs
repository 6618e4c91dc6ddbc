pub mod kind;
pub mod ordinal;
pub mod term;

pub use kind::{DeletePolicy, ExerciseSetKind, PostKind};
pub use ordinal::{Ordinal, resolve_ordinal};
pub use term::{AcademicTerm, HasAcademicTerm, Term};

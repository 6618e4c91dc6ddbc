use std::fmt;

use sea_orm::{DbErr, SqlErr};

/// Category of a rejected write.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Another record already holds the same identifying attributes.
    Duplicate,
    /// A required text field was empty or whitespace.
    Blank,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Duplicate => f.write_str("Duplicate"),
            Self::Blank => f.write_str("Blank"),
        }
    }
}

/// A labeled validation failure, reported to the caller before (or instead
/// of) committing a write.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct ValidationFailure {
    pub kind: FailureKind,
    /// Machine-readable code: `exists` for duplicates, `blank` for empty text.
    pub code: &'static str,
    /// Human-readable description.
    pub message: String,
    /// The fields whose combination was violated.
    pub fields: &'static [&'static str],
}

impl ValidationFailure {
    pub fn duplicate(message: impl Into<String>, fields: &'static [&'static str]) -> Self {
        Self {
            kind: FailureKind::Duplicate,
            code: "exists",
            message: message.into(),
            fields,
        }
    }

    pub fn blank(fields: &'static [&'static str]) -> Self {
        Self {
            kind: FailureKind::Blank,
            code: "blank",
            message: format!("{} must not be blank", fields.join(", ")),
            fields,
        }
    }
}

/// Errors returned by catalog operations.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationFailure),
    #[error("{0} not found")]
    NotFound(String),
    /// The record is reserved and cannot be modified this way.
    #[error("{0}")]
    Protected(String),
    #[error("database error: {0}")]
    Database(#[from] DbErr),
}

impl CatalogError {
    /// The validation failure, if this error is one.
    pub fn validation(&self) -> Option<&ValidationFailure> {
        match self {
            Self::Validation(failure) => Some(failure),
            _ => None,
        }
    }

    pub fn is_duplicate(&self) -> bool {
        self.validation()
            .is_some_and(|f| f.kind == FailureKind::Duplicate)
    }
}

/// Turn a unique-constraint violation raised at commit time into the same
/// Duplicate failure the pre-insert check would have produced. Concurrent
/// writers racing on one key end up here.
pub(crate) fn map_unique_violation(
    err: DbErr,
    on_duplicate: impl FnOnce() -> ValidationFailure,
) -> CatalogError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(detail)) => {
            tracing::warn!(%detail, "Unique constraint rejected write");
            CatalogError::Validation(on_duplicate())
        }
        _ => CatalogError::Database(err),
    }
}

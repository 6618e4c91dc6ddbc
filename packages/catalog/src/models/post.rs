use serde::Deserialize;

use crate::error::ValidationFailure;

#[derive(Debug, Clone, Deserialize)]
pub struct NewExercise {
    pub exercise_set_id: i32,
    pub number: i32,
    /// Text of the first revision.
    pub text: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NewSolution {
    pub exercise_id: i32,
    pub author_id: i32,
    /// Text of the first revision.
    pub text: String,
}

/// Revision text is required and may not be only whitespace.
pub fn validate_revision_text(text: &str) -> Result<(), ValidationFailure> {
    if text.trim().is_empty() {
        return Err(ValidationFailure::blank(&["text"]));
    }
    Ok(())
}

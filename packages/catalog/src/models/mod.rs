pub mod exercise_set;
pub mod post;

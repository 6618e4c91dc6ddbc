pub mod account;
pub mod deletion;
pub mod exercise_set;
pub mod post;
pub mod vote;

pub mod account;
pub mod exam;
pub mod exercise;
pub mod exercise_set;
pub mod final_exam;
pub mod practice;
pub mod revision;
pub mod solution;
pub mod subject;
pub mod user_profile;
pub mod vote;

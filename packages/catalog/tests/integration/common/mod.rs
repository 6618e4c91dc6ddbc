use chrono::NaiveDate;
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use catalog::config::{AccountConfig, AppConfig, DatabaseConfig};
use catalog::entity::{account, exam, exercise, final_exam, practice, solution, subject, user_profile};
use catalog::models::exercise_set::{NewExam, NewFinalExam, NewPractice};
use catalog::models::post::{NewExercise, NewSolution};
use catalog::services;
use ::common::Term;

/// A freshly initialized store backed by a SQLite file in a temp directory.
pub struct TestDb {
    pub db: DatabaseConnection,
    pub accounts: AccountConfig,
    // Keeps the database file alive for the duration of the test.
    _dir: TempDir,
}

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

pub fn new_practice(subject_id: i32, year: i32, term: Term, number: i32) -> NewPractice {
    NewPractice {
        subject_id,
        year,
        term,
        number,
        title: None,
    }
}

pub fn new_exam(subject_id: i32, year: i32, term: Term, number: i32, is_makeup: bool) -> NewExam {
    NewExam {
        subject_id,
        year,
        term,
        number,
        date: None,
        is_makeup,
    }
}

fn temp_config() -> (TempDir, AppConfig) {
    let dir = tempfile::tempdir().expect("Failed to create temp dir");
    let url = format!(
        "sqlite://{}?mode=rwc",
        dir.path().join("catalog.db").display()
    );
    let config = AppConfig {
        database: DatabaseConfig::single(url),
        accounts: AccountConfig::default(),
    };
    (dir, config)
}

impl TestDb {
    pub async fn spawn() -> Self {
        let (dir, config) = temp_config();
        let db = catalog::bootstrap(&config)
            .await
            .expect("Failed to initialize test database");

        Self {
            db,
            accounts: config.accounts,
            _dir: dir,
        }
    }

    /// Schema only: the sentinel account has not been created yet.
    pub async fn spawn_without_sentinel() -> Self {
        let (dir, config) = temp_config();
        let db = catalog::database::init_db(&config.database)
            .await
            .expect("Failed to initialize test database");

        Self {
            db,
            accounts: config.accounts,
            _dir: dir,
        }
    }

    pub async fn subject(&self) -> subject::Model {
        services::exercise_set::create_subject(&self.db)
            .await
            .expect("create subject")
    }

    pub async fn practice(&self, subject_id: i32, number: i32) -> practice::Model {
        services::exercise_set::create_practice(
            &self.db,
            new_practice(subject_id, 2024, Term::First, number),
        )
        .await
        .expect("create practice")
    }

    pub async fn exam(&self, subject_id: i32, number: i32, is_makeup: bool) -> exam::Model {
        services::exercise_set::create_exam(
            &self.db,
            new_exam(subject_id, 2024, Term::First, number, is_makeup),
        )
        .await
        .expect("create exam")
    }

    pub async fn final_exam(&self, subject_id: i32, on: NaiveDate) -> final_exam::Model {
        services::exercise_set::create_final_exam(
            &self.db,
            NewFinalExam {
                subject_id,
                date: on,
            },
        )
        .await
        .expect("create final exam")
    }

    pub async fn exercise(&self, exercise_set_id: i32, number: i32, text: &str) -> exercise::Model {
        services::post::create_exercise(
            &self.db,
            NewExercise {
                exercise_set_id,
                number,
                text: text.to_string(),
            },
        )
        .await
        .expect("create exercise")
    }

    pub async fn account(&self, username: &str) -> (account::Model, user_profile::Model) {
        services::account::register_account(&self.db, username)
            .await
            .expect("register account")
    }

    pub async fn solution(&self, exercise_id: i32, author_id: i32, text: &str) -> solution::Model {
        services::post::create_solution(
            &self.db,
            NewSolution {
                exercise_id,
                author_id,
                text: text.to_string(),
            },
        )
        .await
        .expect("create solution")
    }
}

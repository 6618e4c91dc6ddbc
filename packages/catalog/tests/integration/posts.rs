use ::common::PostKind;
use catalog::entity::revision;
use catalog::error::{CatalogError, FailureKind};
use catalog::models::post::NewExercise;
use catalog::revision::{HasRevisionHistory, append_revision, render_post};
use catalog::services::post::{create_exercise, list_exercises, list_solutions, renumber_exercise};
use catalog::validation::EXERCISE_FIELDS;
use sea_orm::{EntityTrait, PaginatorTrait};

use crate::common::TestDb;

mod exercises {
    use super::*;

    #[tokio::test]
    async fn number_is_unique_within_a_set() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let other_set = t.practice(s.id, 2).await;
        t.exercise(set.id, 1, "Compute the limit.").await;

        let err = create_exercise(
            &t.db,
            NewExercise {
                exercise_set_id: set.id,
                number: 1,
                text: "Another statement.".into(),
            },
        )
        .await
        .unwrap_err();
        assert!(err.is_duplicate());
        assert_eq!(err.validation().map(|f| f.fields), Some(EXERCISE_FIELDS));

        t.exercise(other_set.id, 1, "Same number, other set.").await;
    }

    #[tokio::test]
    async fn listed_in_ascending_number_order() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.exam(s.id, 1, false).await;
        for n in [3, 1, 2] {
            t.exercise(set.id, n, &format!("Exercise text {n}")).await;
        }

        let numbers: Vec<i32> = list_exercises(&t.db, set.id)
            .await
            .expect("list exercises")
            .iter()
            .map(|e| e.number)
            .collect();
        assert_eq!(numbers, vec![1, 2, 3]);
    }

    #[tokio::test]
    async fn renumbering_onto_a_taken_number_fails() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let first = t.exercise(set.id, 1, "One").await;
        t.exercise(set.id, 2, "Two").await;

        assert!(
            renumber_exercise(&t.db, first.id, 2)
                .await
                .unwrap_err()
                .is_duplicate()
        );
        let moved = renumber_exercise(&t.db, first.id, 5)
            .await
            .expect("free number");
        assert_eq!(moved.to_string(), "Exercise 5");
    }
}

mod revisions {
    use super::*;

    #[tokio::test]
    async fn post_renders_its_newest_revision() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let ex = t.exercise(set.id, 1, "Original statement").await;

        assert_eq!(render_post(&t.db, &ex).await.unwrap(), "Original statement");

        ex.append_revision(&t.db, "Corrected statement")
            .await
            .expect("append revision");
        assert_eq!(render_post(&t.db, &ex).await.unwrap(), "Corrected statement");

        let history: Vec<String> = ex
            .revision_history(&t.db)
            .await
            .unwrap()
            .into_iter()
            .map(|r| r.text)
            .collect();
        assert_eq!(history, vec!["Corrected statement", "Original statement"]);
    }

    #[tokio::test]
    async fn revision_for_a_missing_post_is_not_found() {
        let t = TestDb::spawn().await;

        for kind in [PostKind::Exercise, PostKind::Solution] {
            let err = append_revision(&t.db, kind, 9999, "orphan")
                .await
                .unwrap_err();
            assert!(matches!(err, CatalogError::NotFound(_)), "{kind}: {err}");
        }
        assert_eq!(revision::Entity::find().count(&t.db).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn rapid_appends_keep_insertion_order() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let ex = t.exercise(set.id, 1, "v0").await;

        for i in 1..=5 {
            ex.append_revision(&t.db, &format!("v{i}")).await.unwrap();
        }
        assert_eq!(ex.current_text(&t.db).await.unwrap().as_deref(), Some("v5"));
        assert_eq!(ex.revision_history(&t.db).await.unwrap().len(), 6);
    }

    #[tokio::test]
    async fn blank_text_is_rejected() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;

        let err = create_exercise(
            &t.db,
            NewExercise {
                exercise_set_id: set.id,
                number: 1,
                text: "   ".into(),
            },
        )
        .await
        .unwrap_err();
        assert_eq!(err.validation().map(|f| f.kind), Some(FailureKind::Blank));
        assert!(list_exercises(&t.db, set.id).await.unwrap().is_empty());

        let ex = t.exercise(set.id, 1, "Real text").await;
        let err = ex.append_revision(&t.db, "").await.unwrap_err();
        assert_eq!(err.validation().map(|f| f.code), Some("blank"));
        assert_eq!(render_post(&t.db, &ex).await.unwrap(), "Real text");
    }
}

mod solutions {
    use super::*;

    #[tokio::test]
    async fn solutions_carry_their_own_history() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let ex = t.exercise(set.id, 1, "Statement").await;
        let (author, _) = t.account("ana").await;

        let sol = t.solution(ex.id, author.id, "First attempt").await;
        assert_eq!(sol.points, 0);
        assert_eq!(render_post(&t.db, &sol).await.unwrap(), "First attempt");

        sol.append_revision(&t.db, "Fixed a sign error").await.unwrap();
        assert_eq!(render_post(&t.db, &sol).await.unwrap(), "Fixed a sign error");
        // The exercise's history is separate from its solutions'.
        assert_eq!(render_post(&t.db, &ex).await.unwrap(), "Statement");

        let listed = list_solutions(&t.db, ex.id).await.unwrap();
        assert_eq!(listed.len(), 1);
        assert_eq!(listed[0].id, sol.id);
    }
}

use catalog::config::DEFAULT_SENTINEL_USERNAME;
use catalog::entity::{
    account, exam, exercise, exercise_set, practice, revision, solution, subject, user_profile,
    vote,
};
use catalog::error::CatalogError;
use catalog::revision::render_post;
use catalog::services::account::resolve_sentinel_account;
use catalog::services::deletion::{
    delete_account, delete_exercise, delete_solution, delete_subject,
};
use catalog::services::vote::cast_vote;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::common::TestDb;

mod account_deletion {
    use super::*;

    #[tokio::test]
    async fn authored_solutions_move_to_the_sentinel() {
        let t = TestDb::spawn().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let ex = t.exercise(set.id, 1, "Statement").await;
        let (author, author_profile) = t.account("leaving").await;
        let (voter_account, voter) = t.account("voter").await;
        let sol = t.solution(ex.id, author.id, "Kept answer").await;
        cast_vote(&t.db, voter.id, sol.id, true).await.unwrap();
        cast_vote(&t.db, author_profile.id, sol.id, true).await.unwrap();

        let summary = delete_account(&t.db, author.id, &t.accounts).await.unwrap();
        assert_eq!(summary.reassigned_solutions, 1);
        assert_eq!(summary.accounts, 1);
        assert_eq!(summary.profiles, 1);
        assert_eq!(summary.votes, 1);

        let sentinel = resolve_sentinel_account(&t.db, &t.accounts).await.unwrap();
        assert_eq!(sentinel.username, "Deleted");

        let kept = solution::Entity::find_by_id(sol.id)
            .one(&t.db)
            .await
            .unwrap()
            .expect("solution survives its author");
        assert_eq!(kept.author_id, sentinel.id);
        assert_eq!(kept.points, 2);
        assert_eq!(render_post(&t.db, &kept).await.unwrap(), "Kept answer");

        assert!(account::Entity::find_by_id(author.id).one(&t.db).await.unwrap().is_none());
        assert!(
            user_profile::Entity::find_by_id(author_profile.id)
                .one(&t.db)
                .await
                .unwrap()
                .is_none()
        );
        // Other users' votes on the kept solution remain.
        assert!(
            vote::Entity::find_by_id((voter.id, sol.id))
                .one(&t.db)
                .await
                .unwrap()
                .is_some()
        );
        assert!(account::Entity::find_by_id(voter_account.id).one(&t.db).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn sentinel_is_created_on_first_reassignment() {
        let t = TestDb::spawn_without_sentinel().await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let ex = t.exercise(set.id, 1, "Statement").await;
        let (author, _) = t.account("leaving").await;
        let sol = t.solution(ex.id, author.id, "Kept answer").await;

        let sentinel_query =
            account::Entity::find().filter(account::Column::Username.eq(DEFAULT_SENTINEL_USERNAME));
        assert_eq!(sentinel_query.clone().count(&t.db).await.unwrap(), 0);

        let summary = delete_account(&t.db, author.id, &t.accounts).await.unwrap();
        assert_eq!(summary.reassigned_solutions, 1);
        assert_eq!(sentinel_query.count(&t.db).await.unwrap(), 1);

        let sentinel = resolve_sentinel_account(&t.db, &t.accounts).await.unwrap();
        let kept = solution::Entity::find_by_id(sol.id)
            .one(&t.db)
            .await
            .unwrap()
            .expect("solution survives its author");
        assert_eq!(kept.author_id, sentinel.id);
    }

    #[tokio::test]
    async fn sentinel_cannot_be_deleted() {
        let t = TestDb::spawn().await;
        let sentinel = resolve_sentinel_account(&t.db, &t.accounts).await.unwrap();

        let err = delete_account(&t.db, sentinel.id, &t.accounts).await.unwrap_err();
        assert!(matches!(err, CatalogError::Protected(_)));
    }
}

mod cascades {
    use super::*;

    #[tokio::test]
    async fn deleting_a_subject_removes_everything_beneath_it() {
        let t = TestDb::spawn().await;
        let (author, _) = t.account("author").await;
        let (_, voter) = t.account("voter").await;

        let doomed = t.subject().await;
        let practice_set = t.practice(doomed.id, 1).await;
        let exam_set = t.exam(doomed.id, 1, false).await;
        let ex1 = t.exercise(practice_set.id, 1, "P1").await;
        let ex2 = t.exercise(exam_set.id, 1, "E1").await;
        let sol = t.solution(ex1.id, author.id, "S1").await;
        t.solution(ex2.id, author.id, "S2").await;
        cast_vote(&t.db, voter.id, sol.id, true).await.unwrap();

        let kept = t.subject().await;
        let kept_set = t.practice(kept.id, 1).await;
        let kept_ex = t.exercise(kept_set.id, 1, "Survivor").await;

        let summary = delete_subject(&t.db, doomed.id).await.unwrap();
        assert_eq!(summary.subjects, 1);
        assert_eq!(summary.exercise_sets, 2);
        assert_eq!(summary.exercises, 2);
        assert_eq!(summary.solutions, 2);
        assert_eq!(summary.revisions, 4);
        assert_eq!(summary.votes, 1);

        assert!(subject::Entity::find_by_id(doomed.id).one(&t.db).await.unwrap().is_none());
        assert_eq!(exercise_set::Entity::find().count(&t.db).await.unwrap(), 1);
        assert_eq!(practice::Entity::find().count(&t.db).await.unwrap(), 1);
        assert_eq!(exam::Entity::find().count(&t.db).await.unwrap(), 0);
        assert_eq!(exercise::Entity::find().count(&t.db).await.unwrap(), 1);
        assert_eq!(solution::Entity::find().count(&t.db).await.unwrap(), 0);
        assert_eq!(vote::Entity::find().count(&t.db).await.unwrap(), 0);
        assert_eq!(revision::Entity::find().count(&t.db).await.unwrap(), 1);
        assert_eq!(render_post(&t.db, &kept_ex).await.unwrap(), "Survivor");

        // Accounts are not owned by subjects.
        assert_eq!(account::Entity::find().count(&t.db).await.unwrap(), 3);
    }

    #[tokio::test]
    async fn deleting_an_exercise_keeps_its_siblings() {
        let t = TestDb::spawn().await;
        let (author, _) = t.account("author").await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let gone = t.exercise(set.id, 1, "Gone").await;
        let stays = t.exercise(set.id, 2, "Stays").await;
        t.solution(gone.id, author.id, "Orphaned answer").await;

        let summary = delete_exercise(&t.db, gone.id).await.unwrap();
        assert_eq!(summary.exercises, 1);
        assert_eq!(summary.solutions, 1);
        assert_eq!(summary.revisions, 2);

        assert!(exercise::Entity::find_by_id(stays.id).one(&t.db).await.unwrap().is_some());
        assert!(practice::Entity::find_by_id(set.id).one(&t.db).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn deleting_a_solution_removes_its_votes_and_history() {
        let t = TestDb::spawn().await;
        let (author, _) = t.account("author").await;
        let (_, voter) = t.account("voter").await;
        let s = t.subject().await;
        let set = t.practice(s.id, 1).await;
        let ex = t.exercise(set.id, 1, "Statement").await;
        let sol = t.solution(ex.id, author.id, "Answer").await;
        cast_vote(&t.db, voter.id, sol.id, false).await.unwrap();

        let summary = delete_solution(&t.db, sol.id).await.unwrap();
        assert_eq!(summary.solutions, 1);
        assert_eq!(summary.votes, 1);
        assert_eq!(summary.revisions, 1);
        assert_eq!(render_post(&t.db, &ex).await.unwrap(), "Statement");
    }

    #[tokio::test]
    async fn deleting_a_missing_subject_is_not_found() {
        let t = TestDb::spawn().await;
        let err = delete_subject(&t.db, 42).await.unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }
}

use catalog::config::DEFAULT_SENTINEL_USERNAME;
use catalog::entity::account;
use catalog::services::account::{register_account, resolve_sentinel_account};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};

use crate::common::TestDb;

#[tokio::test]
async fn sentinel_account_is_created_once() {
    let t = TestDb::spawn().await;

    let first = resolve_sentinel_account(&t.db, &t.accounts).await.unwrap();
    let second = resolve_sentinel_account(&t.db, &t.accounts).await.unwrap();

    assert_eq!(first.id, second.id);
    assert_eq!(first.username, DEFAULT_SENTINEL_USERNAME);
    let count = account::Entity::find()
        .filter(account::Column::Username.eq(DEFAULT_SENTINEL_USERNAME))
        .count(&t.db)
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
async fn usernames_are_unique() {
    let t = TestDb::spawn().await;
    let (acc, profile) = t.account("ana").await;
    assert_eq!(profile.account_id, acc.id);
    assert_eq!(profile.points, 0);

    let err = register_account(&t.db, "ana").await.unwrap_err();
    assert!(err.is_duplicate());
    assert_eq!(err.validation().map(|f| f.code), Some("exists"));
}

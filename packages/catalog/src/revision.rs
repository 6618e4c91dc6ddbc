//! Revision history shared by every kind of post.

use chrono::{Duration, Utc};
use common::PostKind;
use sea_orm::*;
use tracing::{debug, instrument};

use crate::entity::{exercise, revision, solution};
use crate::error::CatalogError;
use crate::models::post::validate_revision_text;
use crate::utils::lookup::{find_exercise, find_solution};

/// Records whose text is kept as an append-only list of revisions.
///
/// The current text of a post is its newest revision.
#[allow(async_fn_in_trait)]
pub trait HasRevisionHistory {
    const POST_KIND: PostKind;

    fn post_id(&self) -> i32;

    /// Store a new revision and return its id.
    async fn append_revision<C: ConnectionTrait>(
        &self,
        db: &C,
        text: &str,
    ) -> Result<i32, CatalogError> {
        append_revision(db, Self::POST_KIND, self.post_id(), text)
            .await
            .map(|rev| rev.id)
    }

    async fn current_revision<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<revision::Model>, CatalogError> {
        latest_revision(db, Self::POST_KIND, self.post_id()).await
    }

    /// Text of the newest revision, if the post has any.
    async fn current_text<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Option<String>, CatalogError> {
        Ok(self.current_revision(db).await?.map(|rev| rev.text))
    }

    /// All revisions, newest first.
    async fn revision_history<C: ConnectionTrait>(
        &self,
        db: &C,
    ) -> Result<Vec<revision::Model>, CatalogError> {
        revisions_of(db, Self::POST_KIND, self.post_id()).await
    }
}

impl HasRevisionHistory for exercise::Model {
    const POST_KIND: PostKind = PostKind::Exercise;

    fn post_id(&self) -> i32 {
        self.id
    }
}

impl HasRevisionHistory for solution::Model {
    const POST_KIND: PostKind = PostKind::Solution;

    fn post_id(&self) -> i32 {
        self.id
    }
}

/// A post renders as the text of its newest revision, or an empty string
/// when it has none yet.
pub async fn render_post<P, C>(db: &C, post: &P) -> Result<String, CatalogError>
where
    P: HasRevisionHistory,
    C: ConnectionTrait,
{
    Ok(post.current_text(db).await?.unwrap_or_default())
}

/// Insert a revision for the given post. The post must exist.
///
/// Timestamps are kept strictly increasing per post so that "newest" always
/// means "last appended", even if the clock steps backwards.
#[instrument(skip(db, text))]
pub async fn append_revision<C: ConnectionTrait>(
    db: &C,
    kind: PostKind,
    post_id: i32,
    text: &str,
) -> Result<revision::Model, CatalogError> {
    validate_revision_text(text)?;
    ensure_post_exists(db, kind, post_id).await?;

    let mut created_at = Utc::now();
    if let Some(previous) = latest_revision(db, kind, post_id).await? {
        if previous.created_at >= created_at {
            created_at = previous.created_at + Duration::microseconds(1);
        }
    }

    let model = revision::ActiveModel {
        post_kind: Set(kind),
        post_id: Set(post_id),
        text: Set(text.to_string()),
        created_at: Set(created_at),
        ..Default::default()
    }
    .insert(db)
    .await?;

    debug!(revision_id = model.id, "Appended revision");
    Ok(model)
}

async fn ensure_post_exists<C: ConnectionTrait>(
    db: &C,
    kind: PostKind,
    post_id: i32,
) -> Result<(), CatalogError> {
    match kind {
        PostKind::Exercise => find_exercise(db, post_id).await.map(drop),
        PostKind::Solution => find_solution(db, post_id).await.map(drop),
    }
}

pub async fn latest_revision<C: ConnectionTrait>(
    db: &C,
    kind: PostKind,
    post_id: i32,
) -> Result<Option<revision::Model>, CatalogError> {
    Ok(history_query(kind, post_id).one(db).await?)
}

pub async fn revisions_of<C: ConnectionTrait>(
    db: &C,
    kind: PostKind,
    post_id: i32,
) -> Result<Vec<revision::Model>, CatalogError> {
    Ok(history_query(kind, post_id).all(db).await?)
}

fn history_query(kind: PostKind, post_id: i32) -> Select<revision::Entity> {
    revision::Entity::find()
        .filter(revision::Column::PostKind.eq(kind))
        .filter(revision::Column::PostId.eq(post_id))
        .order_by_desc(revision::Column::CreatedAt)
        .order_by_desc(revision::Column::Id)
}

/// Delete the revisions of the given posts. Returns the number of rows removed.
pub(crate) async fn delete_revisions<C: ConnectionTrait>(
    db: &C,
    kind: PostKind,
    post_ids: Vec<i32>,
) -> Result<u64, DbErr> {
    if post_ids.is_empty() {
        return Ok(0);
    }
    let result = revision::Entity::delete_many()
        .filter(revision::Column::PostKind.eq(kind))
        .filter(revision::Column::PostId.is_in(post_ids))
        .exec(db)
        .await?;
    Ok(result.rows_affected)
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    AddedReply, CommentId, NewReply, Reply, ReplyId, ReplyRepository, RepositoryError,
    RepositoryResult, UserId,
};
use sqlx::{FromRow, PgPool};

use super::{invalid_data, map_sqlx_err};
use crate::id::{prefixed_id, IdGenerator};

#[derive(Debug, FromRow)]
struct AddedReplyRecord {
    id: String,
    content: String,
    user_id: String,
}

#[derive(Debug, FromRow)]
struct ReplyRecord {
    id: String,
    comment_id: String,
    content: String,
    date: DateTime<Utc>,
    username: String,
    is_deleted: bool,
}

impl From<ReplyRecord> for Reply {
    fn from(value: ReplyRecord) -> Self {
        Reply {
            id: ReplyId::from(value.id),
            comment_id: CommentId::from(value.comment_id),
            content: value.content,
            date: value.date,
            username: value.username,
            is_deleted: value.is_deleted,
        }
    }
}

#[derive(Clone)]
pub struct PgReplyRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgReplyRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ReplyRepository for PgReplyRepository {
    async fn add_reply(&self, reply: &NewReply) -> RepositoryResult<AddedReply> {
        let record = sqlx::query_as::<_, AddedReplyRecord>(
            r#"
            INSERT INTO replies (id, content, comment_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, user_id
            "#,
        )
        .bind(prefixed_id("reply", self.id_generator.as_ref()))
        .bind(&reply.content)
        .bind(reply.comment_id.as_str())
        .bind(reply.owner.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        AddedReply::new(record.id, record.content, record.user_id)
            .map_err(|err| invalid_data(err.to_string()))
    }

    async fn reply_exists(&self, reply_id: &ReplyId) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1)")
            .bind(reply_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn is_reply_owner(
        &self,
        reply_id: &ReplyId,
        user_id: &UserId,
    ) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM replies WHERE id = $1 AND user_id = $2)",
        )
        .bind(reply_id.as_str())
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn delete_reply(&self, reply_id: &ReplyId) -> RepositoryResult<()> {
        let result = sqlx::query("UPDATE replies SET is_deleted = TRUE WHERE id = $1")
            .bind(reply_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> RepositoryResult<Vec<Reply>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<&str> = comment_ids.iter().map(CommentId::as_str).collect();
        let records = sqlx::query_as::<_, ReplyRecord>(
            r#"
            SELECT r.id, r.comment_id, r.content, r.date, u.username, r.is_deleted
            FROM replies r
            JOIN users u ON u.id = r.user_id
            WHERE r.comment_id = ANY($1)
            ORDER BY r.date ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(records.into_iter().map(Reply::from).collect())
    }
}

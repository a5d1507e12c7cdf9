use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    AddedComment, Comment, CommentId, CommentRepository, NewComment, RepositoryError,
    RepositoryResult, ThreadId, UserId,
};
use sqlx::{FromRow, PgPool};

use super::{invalid_data, map_sqlx_err};
use crate::id::{prefixed_id, IdGenerator};

#[derive(Debug, FromRow)]
struct AddedCommentRecord {
    id: String,
    content: String,
    user_id: String,
}

#[derive(Debug, FromRow)]
struct CommentRecord {
    id: String,
    thread_id: String,
    content: String,
    date: DateTime<Utc>,
    username: String,
    is_deleted: bool,
}

impl From<CommentRecord> for Comment {
    fn from(value: CommentRecord) -> Self {
        Comment {
            id: CommentId::from(value.id),
            thread_id: ThreadId::from(value.thread_id),
            content: value.content,
            date: value.date,
            username: value.username,
            is_deleted: value.is_deleted,
        }
    }
}

#[derive(Clone)]
pub struct PgCommentRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgCommentRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl CommentRepository for PgCommentRepository {
    async fn add_comment(&self, comment: &NewComment) -> RepositoryResult<AddedComment> {
        let record = sqlx::query_as::<_, AddedCommentRecord>(
            r#"
            INSERT INTO comments (id, content, thread_id, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, content, user_id
            "#,
        )
        .bind(prefixed_id("comment", self.id_generator.as_ref()))
        .bind(&comment.content)
        .bind(comment.thread_id.as_str())
        .bind(comment.owner.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        AddedComment::new(record.id, record.content, record.user_id)
            .map_err(|err| invalid_data(err.to_string()))
    }

    async fn comment_exists(&self, comment_id: &CommentId) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1)")
            .bind(comment_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn is_comment_owner(
        &self,
        comment_id: &CommentId,
        user_id: &UserId,
    ) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comments WHERE id = $1 AND user_id = $2)",
        )
        .bind(comment_id.as_str())
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn delete_comment(&self, comment_id: &CommentId) -> RepositoryResult<()> {
        let result = sqlx::query("UPDATE comments SET is_deleted = TRUE WHERE id = $1")
            .bind(comment_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        if result.rows_affected() == 0 {
            return Err(RepositoryError::NotFound);
        }
        Ok(())
    }

    async fn get_comments_by_thread_ids(
        &self,
        thread_ids: &[ThreadId],
    ) -> RepositoryResult<Vec<Comment>> {
        let ids: Vec<&str> = thread_ids.iter().map(ThreadId::as_str).collect();
        let records = sqlx::query_as::<_, CommentRecord>(
            r#"
            SELECT c.id, c.thread_id, c.content, c.date, u.username, c.is_deleted
            FROM comments c
            JOIN users u ON u.id = c.user_id
            WHERE c.thread_id = ANY($1)
            ORDER BY c.date ASC
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        Ok(records.into_iter().map(Comment::from).collect())
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use domain::{CommentId, CommentLike, CommentLikeCount, LikeRepository, RepositoryResult};
use sqlx::{FromRow, PgPool};

use super::{invalid_data, map_sqlx_err};
use crate::id::{prefixed_id, IdGenerator};

#[derive(Debug, FromRow)]
struct LikeCountRecord {
    comment_id: String,
    like_count: i64,
}

impl TryFrom<LikeCountRecord> for CommentLikeCount {
    type Error = domain::RepositoryError;

    fn try_from(value: LikeCountRecord) -> Result<Self, Self::Error> {
        let like_count = u64::try_from(value.like_count)
            .map_err(|_| invalid_data(format!("negative like count: {}", value.like_count)))?;
        Ok(CommentLikeCount {
            comment_id: CommentId::from(value.comment_id),
            like_count,
        })
    }
}

#[derive(Clone)]
pub struct PgLikeRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgLikeRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl LikeRepository for PgLikeRepository {
    async fn like_comment(&self, like: &CommentLike) -> RepositoryResult<()> {
        sqlx::query("INSERT INTO comment_likes (id, user_id, comment_id) VALUES ($1, $2, $3)")
            .bind(prefixed_id("like", self.id_generator.as_ref()))
            .bind(like.user_id.as_str())
            .bind(like.comment_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn unlike_comment(&self, like: &CommentLike) -> RepositoryResult<()> {
        sqlx::query("DELETE FROM comment_likes WHERE comment_id = $1 AND user_id = $2")
            .bind(like.comment_id.as_str())
            .bind(like.user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_err)?;
        Ok(())
    }

    async fn is_comment_liked(&self, like: &CommentLike) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM comment_likes WHERE comment_id = $1 AND user_id = $2)",
        )
        .bind(like.comment_id.as_str())
        .bind(like.user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)
    }

    async fn get_like_counts_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> RepositoryResult<Vec<CommentLikeCount>> {
        if comment_ids.is_empty() {
            return Ok(Vec::new());
        }

        let ids: Vec<&str> = comment_ids.iter().map(CommentId::as_str).collect();
        let records = sqlx::query_as::<_, LikeCountRecord>(
            r#"
            SELECT comment_id, COUNT(*) AS like_count
            FROM comment_likes
            WHERE comment_id = ANY($1)
            GROUP BY comment_id
            "#,
        )
        .bind(&ids)
        .fetch_all(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        records.into_iter().map(CommentLikeCount::try_from).collect()
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use domain::{
    AddedThread, NewThread, RepositoryError, RepositoryResult, Thread, ThreadId,
    ThreadRepository,
};
use sqlx::{FromRow, PgPool};

use super::{invalid_data, map_sqlx_err};
use crate::id::{prefixed_id, IdGenerator};

#[derive(Debug, FromRow)]
struct AddedThreadRecord {
    id: String,
    title: String,
    user_id: String,
}

#[derive(Debug, FromRow)]
struct ThreadRecord {
    id: String,
    title: String,
    body: String,
    date: DateTime<Utc>,
    username: String,
}

impl From<ThreadRecord> for Thread {
    fn from(value: ThreadRecord) -> Self {
        Thread {
            id: ThreadId::from(value.id),
            title: value.title,
            body: value.body,
            date: value.date,
            username: value.username,
        }
    }
}

#[derive(Clone)]
pub struct PgThreadRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgThreadRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl ThreadRepository for PgThreadRepository {
    async fn add_thread(&self, thread: &NewThread) -> RepositoryResult<AddedThread> {
        let record = sqlx::query_as::<_, AddedThreadRecord>(
            r#"
            INSERT INTO threads (id, title, body, user_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id, title, user_id
            "#,
        )
        .bind(prefixed_id("thread", self.id_generator.as_ref()))
        .bind(&thread.title)
        .bind(&thread.body)
        .bind(thread.owner.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        AddedThread::new(record.id, record.title, record.user_id)
            .map_err(|err| invalid_data(err.to_string()))
    }

    async fn thread_exists(&self, thread_id: &ThreadId) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM threads WHERE id = $1)")
            .bind(thread_id.as_str())
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn get_thread_by_id(&self, thread_id: &ThreadId) -> RepositoryResult<Thread> {
        let record = sqlx::query_as::<_, ThreadRecord>(
            r#"
            SELECT t.id, t.title, t.body, t.date, u.username
            FROM threads t
            JOIN users u ON u.id = t.user_id
            WHERE t.id = $1
            "#,
        )
        .bind(thread_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx_err)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(Thread::from(record))
    }
}

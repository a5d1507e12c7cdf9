//! PostgreSQL 仓储实现

mod authentication;
mod comment;
mod like;
mod reply;
mod thread;
mod user;

use std::{sync::Arc, time::Duration};

use domain::RepositoryError;
use sqlx::{postgres::PgPoolOptions, PgPool};

use crate::id::IdGenerator;

pub use authentication::PgAuthenticationRepository;
pub use comment::PgCommentRepository;
pub use like::PgLikeRepository;
pub use reply::PgReplyRepository;
pub use thread::PgThreadRepository;
pub use user::PgUserRepository;

pub(crate) fn map_sqlx_err(err: sqlx::Error) -> RepositoryError {
    match &err {
        sqlx::Error::RowNotFound => RepositoryError::NotFound,
        sqlx::Error::Database(db_err) if db_err.is_unique_violation() => RepositoryError::Conflict,
        _ => RepositoryError::storage(err.to_string()),
    }
}

pub(crate) fn invalid_data(message: impl Into<String>) -> RepositoryError {
    RepositoryError::storage(message)
}

#[derive(Clone)]
pub struct PgStorage {
    pub pool: PgPool,
    pub user_repository: Arc<PgUserRepository>,
    pub authentication_repository: Arc<PgAuthenticationRepository>,
    pub thread_repository: Arc<PgThreadRepository>,
    pub comment_repository: Arc<PgCommentRepository>,
    pub reply_repository: Arc<PgReplyRepository>,
    pub like_repository: Arc<PgLikeRepository>,
}

impl PgStorage {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self {
            user_repository: Arc::new(PgUserRepository::new(pool.clone(), id_generator.clone())),
            authentication_repository: Arc::new(PgAuthenticationRepository::new(pool.clone())),
            thread_repository: Arc::new(PgThreadRepository::new(
                pool.clone(),
                id_generator.clone(),
            )),
            comment_repository: Arc::new(PgCommentRepository::new(
                pool.clone(),
                id_generator.clone(),
            )),
            reply_repository: Arc::new(PgReplyRepository::new(pool.clone(), id_generator.clone())),
            like_repository: Arc::new(PgLikeRepository::new(pool.clone(), id_generator)),
            pool,
        }
    }
}

pub async fn create_pg_pool(
    database_url: &str,
    max_connections: u32,
    acquire_timeout: Duration,
) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(max_connections)
        .acquire_timeout(acquire_timeout)
        .connect(database_url)
        .await
}

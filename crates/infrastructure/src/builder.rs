use std::{sync::Arc, time::Duration};

use application::{AuthenticationTokenManager, PasswordHasher, UseCaseDependencies};
use domain::{
    AuthenticationRepository, CommentRepository, LikeRepository, ReplyRepository,
    ThreadRepository, UserRepository,
};
use thiserror::Error;

use crate::{
    id::{IdGenerator, UuidIdGenerator},
    memory::InMemoryStorage,
    migrations::MIGRATOR,
    password::BcryptPasswordHasher,
    repository::{create_pg_pool, PgStorage},
    token::{JwtTokenManager, TokenConfig},
};

#[derive(Debug, Clone)]
pub struct InfrastructureConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    pub bcrypt_cost: Option<u32>,
    pub token: TokenConfig,
}

#[derive(Debug, Error)]
pub enum InfrastructureError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// 基础设施装配结果：六个仓储加上密码哈希与令牌管理器
#[derive(Clone)]
pub struct Infrastructure {
    pub user_repository: Arc<dyn UserRepository>,
    pub authentication_repository: Arc<dyn AuthenticationRepository>,
    pub thread_repository: Arc<dyn ThreadRepository>,
    pub comment_repository: Arc<dyn CommentRepository>,
    pub reply_repository: Arc<dyn ReplyRepository>,
    pub like_repository: Arc<dyn LikeRepository>,
    pub password_hasher: Arc<BcryptPasswordHasher>,
    pub token_manager: Arc<JwtTokenManager>,
}

impl Infrastructure {
    /// 连接 PostgreSQL 并执行迁移
    pub async fn connect(config: InfrastructureConfig) -> Result<Self, InfrastructureError> {
        let pool =
            create_pg_pool(&config.database_url, config.max_connections, config.acquire_timeout)
                .await?;
        MIGRATOR.run(&pool).await?;
        tracing::info!("database migrations applied");

        let storage = PgStorage::new(pool, Arc::new(UuidIdGenerator));
        Ok(Self {
            user_repository: storage.user_repository,
            authentication_repository: storage.authentication_repository,
            thread_repository: storage.thread_repository,
            comment_repository: storage.comment_repository,
            reply_repository: storage.reply_repository,
            like_repository: storage.like_repository,
            password_hasher: Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
            token_manager: Arc::new(JwtTokenManager::new(&config.token)),
        })
    }

    /// 进程内存储，不需要数据库
    pub fn in_memory(config: &InfrastructureConfig, id_generator: Arc<dyn IdGenerator>) -> Self {
        let storage = Arc::new(InMemoryStorage::new(id_generator));
        Self {
            user_repository: storage.clone(),
            authentication_repository: storage.clone(),
            thread_repository: storage.clone(),
            comment_repository: storage.clone(),
            reply_repository: storage.clone(),
            like_repository: storage,
            password_hasher: Arc::new(BcryptPasswordHasher::new(config.bcrypt_cost)),
            token_manager: Arc::new(JwtTokenManager::new(&config.token)),
        }
    }

    pub fn token_manager_trait(&self) -> Arc<dyn AuthenticationTokenManager> {
        self.token_manager.clone()
    }

    pub fn use_case_dependencies(&self) -> UseCaseDependencies {
        let password_hasher: Arc<dyn PasswordHasher> = self.password_hasher.clone();
        UseCaseDependencies {
            thread_repository: self.thread_repository.clone(),
            comment_repository: self.comment_repository.clone(),
            reply_repository: self.reply_repository.clone(),
            like_repository: self.like_repository.clone(),
            user_repository: self.user_repository.clone(),
            authentication_repository: self.authentication_repository.clone(),
            password_hasher,
            token_manager: self.token_manager_trait(),
        }
    }
}

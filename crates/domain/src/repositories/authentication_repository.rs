//! 刷新令牌存储接口

use async_trait::async_trait;

use crate::errors::RepositoryResult;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait AuthenticationRepository: Send + Sync {
    async fn add_token(&self, token: &str) -> RepositoryResult<()>;

    async fn token_exists(&self, token: &str) -> RepositoryResult<bool>;

    async fn delete_token(&self, token: &str) -> RepositoryResult<()>;
}

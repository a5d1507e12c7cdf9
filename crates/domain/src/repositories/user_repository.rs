//! 用户Repository接口定义

use async_trait::async_trait;

use crate::entities::user::{NewUser, RegisteredUser};
use crate::errors::RepositoryResult;
use crate::value_objects::{PasswordHash, UserId};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 用户名是否已被占用
    async fn username_exists(&self, username: &str) -> RepositoryResult<bool>;

    async fn add_user(&self, user: &NewUser) -> RepositoryResult<RegisteredUser>;

    async fn get_password_by_username(
        &self,
        username: &str,
    ) -> RepositoryResult<Option<PasswordHash>>;

    async fn get_id_by_username(&self, username: &str) -> RepositoryResult<Option<UserId>>;
}

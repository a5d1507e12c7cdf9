//! 密码哈希端口
//!
//! 注册时哈希明文密码，登录时比对。具体算法由基础设施层提供。

use async_trait::async_trait;
use domain::PasswordHash;
use thiserror::Error;

/// 哈希器自身故障，与“密码不匹配”区分开
#[derive(Debug, Error)]
pub enum PasswordHasherError {
    #[error("password hashing failed: {0}")]
    Hash(String),
    #[error("stored password hash is unreadable: {0}")]
    Verify(String),
}

impl PasswordHasherError {
    pub fn hash_error(message: impl Into<String>) -> Self {
        Self::Hash(message.into())
    }

    pub fn verify_error(message: impl Into<String>) -> Self {
        Self::Verify(message.into())
    }
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    /// AddUser 在写入用户前调用
    async fn hash(&self, plaintext: &str) -> Result<PasswordHash, PasswordHasherError>;

    /// LoginUser 用来比对凭据。
    ///
    /// 不匹配返回 `Ok(false)`，由用例转换为认证失败（401）；
    /// 只有仓储中存的哈希无法解析时才返回 `Err`。
    async fn verify(
        &self,
        plaintext: &str,
        stored: &PasswordHash,
    ) -> Result<bool, PasswordHasherError>;
}

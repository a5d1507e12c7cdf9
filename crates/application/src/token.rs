//! 令牌签发与校验端口

use domain::UserId;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 令牌中携带的用户身份
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPayload {
    pub id: UserId,
    pub username: String,
}

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token encoding failed: {0}")]
    Encode(String),
    #[error("invalid token: {0}")]
    Invalid(String),
}

/// 访问令牌与刷新令牌使用不同的密钥签名
#[cfg_attr(test, mockall::automock)]
pub trait AuthenticationTokenManager: Send + Sync {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, TokenError>;
    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, TokenError>;
    /// 只校验签名，不读取载荷
    fn verify_refresh_token(&self, token: &str) -> Result<(), TokenError>;
    /// 校验签名与有效期，并返回载荷
    fn verify_access_token(&self, token: &str) -> Result<TokenPayload, TokenError>;
    /// 读取已校验过的刷新令牌载荷
    fn decode_payload(&self, token: &str) -> Result<TokenPayload, TokenError>;
}

//! 认证令牌实体

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};

/// 登录成功后签发的一对令牌
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewAuth {
    pub access_token: String,
    pub refresh_token: String,
}

impl NewAuth {
    pub fn new(
        access_token: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> DomainResult<Self> {
        let access_token = access_token.into();
        let refresh_token = refresh_token.into();
        if access_token.is_empty() || refresh_token.is_empty() {
            return Err(DomainError::NewAuthMissingProperty);
        }
        Ok(Self {
            access_token,
            refresh_token,
        })
    }
}

//! 用户实体定义
//!
//! 包含注册请求、持久化前的新用户以及注册结果。

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{PasswordHash, UserId, Username};

/// 注册用户请求，构造时完成字段校验
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterUser {
    pub username: Username,
    pub password: String,
    pub fullname: String,
}

impl RegisterUser {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        fullname: impl Into<String>,
    ) -> DomainResult<Self> {
        let username = username.into();
        let password = password.into();
        let fullname = fullname.into();

        if username.is_empty() || password.is_empty() || fullname.is_empty() {
            return Err(DomainError::RegisterUserMissingProperty);
        }

        Ok(Self {
            username: Username::parse(username)?,
            password,
            fullname,
        })
    }

    /// 用哈希后的密码替换明文，得到可持久化的新用户
    pub fn into_new_user(self, password: PasswordHash) -> NewUser {
        NewUser {
            username: self.username,
            password,
            fullname: self.fullname,
        }
    }
}

/// 待写入仓储的新用户（密码已哈希）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub username: Username,
    pub password: PasswordHash,
    pub fullname: String,
}

/// 注册成功后返回给客户端的用户信息
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegisteredUser {
    pub id: UserId,
    pub username: String,
    pub fullname: String,
}

impl RegisteredUser {
    pub fn new(
        id: impl Into<UserId>,
        username: impl Into<String>,
        fullname: impl Into<String>,
    ) -> DomainResult<Self> {
        let id = id.into();
        let username = username.into();
        let fullname = fullname.into();

        if id.is_empty() || username.is_empty() || fullname.is_empty() {
            return Err(DomainError::RegisteredUserMissingProperty);
        }

        Ok(Self {
            id,
            username,
            fullname,
        })
    }
}

//! 主题实体定义

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{ThreadId, Timestamp, UserId};

/// 新建主题请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewThread {
    pub title: String,
    pub body: String,
    pub owner: UserId,
}

impl NewThread {
    pub fn new(
        title: impl Into<String>,
        body: impl Into<String>,
        owner: impl Into<UserId>,
    ) -> DomainResult<Self> {
        let title = title.into();
        let owner = owner.into();
        if title.is_empty() {
            return Err(DomainError::ThreadTitleEmpty);
        }
        if owner.is_empty() {
            return Err(DomainError::ThreadOwnerEmpty);
        }
        Ok(Self {
            title,
            body: body.into(),
            owner,
        })
    }
}

/// 主题创建结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedThread {
    pub id: ThreadId,
    pub title: String,
    pub owner: UserId,
}

impl AddedThread {
    pub fn new(
        id: impl Into<ThreadId>,
        title: impl Into<String>,
        owner: impl Into<UserId>,
    ) -> DomainResult<Self> {
        let title = title.into();
        let owner = owner.into();
        if title.is_empty() {
            return Err(DomainError::ThreadTitleEmpty);
        }
        if owner.is_empty() {
            return Err(DomainError::ThreadOwnerEmpty);
        }
        Ok(Self {
            id: id.into(),
            title,
            owner,
        })
    }
}

/// 读取侧的主题，带有作者用户名
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thread {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: Timestamp,
    pub username: String,
}

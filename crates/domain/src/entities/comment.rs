//! 评论实体定义

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CommentId, ThreadId, Timestamp, UserId};

/// 新建评论请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewComment {
    pub content: String,
    pub thread_id: ThreadId,
    pub owner: UserId,
}

impl NewComment {
    pub fn new(
        content: impl Into<String>,
        thread_id: impl Into<ThreadId>,
        owner: impl Into<UserId>,
    ) -> DomainResult<Self> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::CommentContentEmpty);
        }
        Ok(Self {
            content,
            thread_id: thread_id.into(),
            owner: owner.into(),
        })
    }
}

/// 评论创建结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedComment {
    pub id: CommentId,
    pub content: String,
    pub owner: UserId,
}

impl AddedComment {
    pub fn new(
        id: impl Into<CommentId>,
        content: impl Into<String>,
        owner: impl Into<UserId>,
    ) -> DomainResult<Self> {
        let content = content.into();
        let owner = owner.into();
        if content.is_empty() {
            return Err(DomainError::CommentContentEmpty);
        }
        if owner.is_empty() {
            return Err(DomainError::CommentOwnerEmpty);
        }
        Ok(Self {
            id: id.into(),
            content,
            owner,
        })
    }
}

/// 读取侧的评论（含软删除标记）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comment {
    pub id: CommentId,
    pub thread_id: ThreadId,
    pub content: String,
    pub date: Timestamp,
    pub username: String,
    pub is_deleted: bool,
}

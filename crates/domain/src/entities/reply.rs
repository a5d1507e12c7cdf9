//! 回复实体定义

use serde::{Deserialize, Serialize};

use crate::errors::{DomainError, DomainResult};
use crate::value_objects::{CommentId, ReplyId, ThreadId, Timestamp, UserId};

/// 新建回复请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReply {
    pub content: String,
    pub thread_id: ThreadId,
    pub comment_id: CommentId,
    pub owner: UserId,
}

impl NewReply {
    pub fn new(
        content: impl Into<String>,
        thread_id: impl Into<ThreadId>,
        comment_id: impl Into<CommentId>,
        owner: impl Into<UserId>,
    ) -> DomainResult<Self> {
        let content = content.into();
        if content.is_empty() {
            return Err(DomainError::ReplyContentEmpty);
        }
        Ok(Self {
            content,
            thread_id: thread_id.into(),
            comment_id: comment_id.into(),
            owner: owner.into(),
        })
    }
}

/// 回复创建结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddedReply {
    pub id: ReplyId,
    pub content: String,
    pub owner: UserId,
}

impl AddedReply {
    pub fn new(
        id: impl Into<ReplyId>,
        content: impl Into<String>,
        owner: impl Into<UserId>,
    ) -> DomainResult<Self> {
        let content = content.into();
        let owner = owner.into();
        if content.is_empty() {
            return Err(DomainError::ReplyContentEmpty);
        }
        if owner.is_empty() {
            return Err(DomainError::ReplyOwnerEmpty);
        }
        Ok(Self {
            id: id.into(),
            content,
            owner,
        })
    }
}

/// 读取侧的回复（含软删除标记）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub id: ReplyId,
    pub comment_id: CommentId,
    pub content: String,
    pub date: Timestamp,
    pub username: String,
    pub is_deleted: bool,
}

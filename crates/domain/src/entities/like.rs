//! 评论点赞

use crate::value_objects::{CommentId, UserId};

/// 点赞以 (评论, 用户) 为复合键
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CommentLike {
    pub comment_id: CommentId,
    pub user_id: UserId,
}

impl CommentLike {
    pub fn new(comment_id: impl Into<CommentId>, user_id: impl Into<UserId>) -> Self {
        Self {
            comment_id: comment_id.into(),
            user_id: user_id.into(),
        }
    }
}

/// 单条评论的点赞数
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommentLikeCount {
    pub comment_id: CommentId,
    pub like_count: u64,
}

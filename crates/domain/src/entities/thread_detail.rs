//! 主题详情聚合
//!
//! 将主题、评论、回复与点赞数在内存中拼装为嵌套结构，
//! 并对软删除的评论与回复进行内容遮盖。

use std::collections::HashMap;

use serde::Serialize;

use crate::entities::comment::Comment;
use crate::entities::like::CommentLikeCount;
use crate::entities::reply::Reply;
use crate::entities::thread::Thread;
use crate::value_objects::{CommentId, ReplyId, ThreadId, Timestamp};

/// 已删除评论的展示内容
pub const DELETED_COMMENT_CONTENT: &str = "**komentar telah dihapus**";
/// 已删除回复的展示内容
pub const DELETED_REPLY_CONTENT: &str = "**balasan telah dihapus**";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ThreadDetail {
    pub id: ThreadId,
    pub title: String,
    pub body: String,
    pub date: Timestamp,
    pub username: String,
    pub comments: Vec<CommentDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CommentDetail {
    pub id: CommentId,
    pub content: String,
    pub date: Timestamp,
    pub username: String,
    pub like_count: u64,
    pub replies: Vec<ReplyDetail>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReplyDetail {
    pub id: ReplyId,
    pub content: String,
    pub date: Timestamp,
    pub username: String,
}

impl From<Reply> for ReplyDetail {
    fn from(reply: Reply) -> Self {
        let content = if reply.is_deleted {
            DELETED_REPLY_CONTENT.to_owned()
        } else {
            reply.content
        };
        Self {
            id: reply.id,
            content,
            date: reply.date,
            username: reply.username,
        }
    }
}

impl CommentDetail {
    pub fn new(comment: Comment, like_count: u64, replies: Vec<ReplyDetail>) -> Self {
        let content = if comment.is_deleted {
            DELETED_COMMENT_CONTENT.to_owned()
        } else {
            comment.content
        };
        Self {
            id: comment.id,
            content,
            date: comment.date,
            username: comment.username,
            like_count,
            replies,
        }
    }
}

impl ThreadDetail {
    /// 拼装主题详情。
    ///
    /// 评论与回复保持输入顺序（仓储按日期升序返回）；
    /// 没有点赞记录的评论 `like_count` 为 0。
    pub fn assemble(
        thread: Thread,
        comments: Vec<Comment>,
        replies: Vec<Reply>,
        like_counts: Vec<CommentLikeCount>,
    ) -> Self {
        let mut replies_by_comment: HashMap<CommentId, Vec<ReplyDetail>> = HashMap::new();
        for reply in replies {
            replies_by_comment
                .entry(reply.comment_id.clone())
                .or_default()
                .push(ReplyDetail::from(reply));
        }

        let like_counts: HashMap<CommentId, u64> = like_counts
            .into_iter()
            .map(|count| (count.comment_id, count.like_count))
            .collect();

        let comments = comments
            .into_iter()
            .map(|comment| {
                let like_count = like_counts.get(&comment.id).copied().unwrap_or(0);
                let replies = replies_by_comment.remove(&comment.id).unwrap_or_default();
                CommentDetail::new(comment, like_count, replies)
            })
            .collect();

        Self {
            id: thread.id,
            title: thread.title,
            body: thread.body,
            date: thread.date,
            username: thread.username,
            comments,
        }
    }
}

//! 领域实体定义
//!
//! 包含论坛的核心实体：用户、认证令牌、主题、评论、回复与点赞。

pub mod auth;
pub mod comment;
pub mod like;
pub mod reply;
pub mod thread;
pub mod thread_detail;
pub mod user;

// 重新导出核心实体
pub use auth::NewAuth;
pub use comment::{AddedComment, Comment, NewComment};
pub use like::{CommentLike, CommentLikeCount};
pub use reply::{AddedReply, NewReply, Reply};
pub use thread::{AddedThread, NewThread, Thread};
pub use thread_detail::{
    CommentDetail, ReplyDetail, ThreadDetail, DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT,
};
pub use user::{NewUser, RegisterUser, RegisteredUser};

use std::sync::Arc;

use domain::{
    CommentId, CommentLike, CommentRepository, LikeRepository, ThreadId, ThreadRepository, UserId,
};

use crate::error::ApplicationError;
use crate::use_cases::guards::{ensure_comment_exists, ensure_thread_exists};

#[derive(Debug, Clone)]
pub struct LikeCommentCommand {
    pub thread_id: ThreadId,
    pub comment_id: CommentId,
    pub user_id: UserId,
}

/// 点赞开关：已点赞则取消，否则点赞
pub struct LikeCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl LikeCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            like_repository,
        }
    }

    pub async fn execute(&self, command: LikeCommentCommand) -> Result<(), ApplicationError> {
        ensure_thread_exists(self.thread_repository.as_ref(), &command.thread_id).await?;
        ensure_comment_exists(self.comment_repository.as_ref(), &command.comment_id).await?;

        // 读后写，并发的重复点赞由 comment_likes 的唯一约束兜底
        let like = CommentLike::new(command.comment_id, command.user_id);
        if self.like_repository.is_comment_liked(&like).await? {
            self.like_repository.unlike_comment(&like).await?;
            tracing::debug!(comment_id = %like.comment_id, user_id = %like.user_id, "comment unliked");
        } else {
            self.like_repository.like_comment(&like).await?;
            tracing::debug!(comment_id = %like.comment_id, user_id = %like.user_id, "comment liked");
        }
        Ok(())
    }
}

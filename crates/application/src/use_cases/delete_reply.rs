use std::sync::Arc;

use domain::{
    CommentId, CommentRepository, ReplyId, ReplyRepository, ThreadId, ThreadRepository, UserId,
};

use crate::error::ApplicationError;
use crate::use_cases::guards::{
    ensure_comment_exists, ensure_reply_exists, ensure_reply_owner, ensure_thread_exists,
};

#[derive(Debug, Clone)]
pub struct DeleteReplyCommand {
    pub thread_id: ThreadId,
    pub comment_id: CommentId,
    pub reply_id: ReplyId,
    pub requester: UserId,
}

pub struct DeleteReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl DeleteReplyUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
        }
    }

    pub async fn execute(&self, command: DeleteReplyCommand) -> Result<(), ApplicationError> {
        let replies = self.reply_repository.as_ref();
        ensure_thread_exists(self.thread_repository.as_ref(), &command.thread_id).await?;
        ensure_comment_exists(self.comment_repository.as_ref(), &command.comment_id).await?;
        ensure_reply_exists(replies, &command.reply_id).await?;
        ensure_reply_owner(replies, &command.reply_id, &command.requester).await?;

        replies.delete_reply(&command.reply_id).await?;
        tracing::info!(reply_id = %command.reply_id, "reply soft-deleted");
        Ok(())
    }
}

use std::sync::Arc;

use domain::{CommentId, CommentRepository, ThreadId, ThreadRepository, UserId};

use crate::error::ApplicationError;
use crate::use_cases::guards::{ensure_comment_exists, ensure_comment_owner, ensure_thread_exists};

#[derive(Debug, Clone)]
pub struct DeleteCommentCommand {
    pub thread_id: ThreadId,
    pub comment_id: CommentId,
    pub requester: UserId,
}

pub struct DeleteCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl DeleteCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    /// 校验顺序：主题存在 → 评论存在 → 请求者为作者，全部通过后软删除
    pub async fn execute(&self, command: DeleteCommentCommand) -> Result<(), ApplicationError> {
        let comments = self.comment_repository.as_ref();
        ensure_thread_exists(self.thread_repository.as_ref(), &command.thread_id).await?;
        ensure_comment_exists(comments, &command.comment_id).await?;
        ensure_comment_owner(comments, &command.comment_id, &command.requester).await?;

        comments.delete_comment(&command.comment_id).await?;
        tracing::info!(comment_id = %command.comment_id, "comment soft-deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, MockCommentRepository, MockThreadRepository};
    use mockall::Sequence;

    use super::*;

    fn command() -> DeleteCommentCommand {
        DeleteCommentCommand {
            thread_id: ThreadId::new("thread-123"),
            comment_id: CommentId::new("comment-123"),
            requester: UserId::new("user-123"),
        }
    }

    #[tokio::test]
    async fn checks_run_in_order_before_delete() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_thread_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        comments
            .expect_comment_exists()
            .withf(|id| id.as_str() == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        comments
            .expect_is_comment_owner()
            .withf(|comment_id, user_id| {
                comment_id.as_str() == "comment-123" && user_id.as_str() == "user-123"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(true));
        comments
            .expect_delete_comment()
            .withf(|id| id.as_str() == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        use_case.execute(command()).await.unwrap();
    }

    #[tokio::test]
    async fn missing_thread_skips_comment_checks() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().returning(|_| Ok(false));
        let mut comments = MockCommentRepository::new();
        comments.expect_comment_exists().never();
        comments.expect_delete_comment().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(command()).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ThreadNotFound)
        ));
    }

    #[tokio::test]
    async fn missing_comment_skips_ownership_check() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().returning(|_| Ok(true));
        let mut comments = MockCommentRepository::new();
        comments.expect_comment_exists().returning(|_| Ok(false));
        comments.expect_is_comment_owner().never();
        comments.expect_delete_comment().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(command()).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::CommentNotFound)
        ));
    }

    #[tokio::test]
    async fn non_owner_cannot_delete() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().returning(|_| Ok(true));
        let mut comments = MockCommentRepository::new();
        comments.expect_comment_exists().returning(|_| Ok(true));
        comments.expect_is_comment_owner().returning(|_, _| Ok(false));
        comments.expect_delete_comment().never();

        let use_case = DeleteCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(command()).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::CommentNotOwner)
        ));
    }
}

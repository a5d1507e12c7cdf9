use std::sync::Arc;

use domain::{AddedComment, CommentRepository, NewComment, ThreadId, ThreadRepository, UserId};

use crate::error::ApplicationError;
use crate::use_cases::guards::ensure_thread_exists;

#[derive(Debug, Clone)]
pub struct AddCommentCommand {
    pub content: String,
    pub thread_id: ThreadId,
    pub owner: UserId,
}

pub struct AddCommentUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
}

impl AddCommentUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
        }
    }

    pub async fn execute(
        &self,
        command: AddCommentCommand,
    ) -> Result<AddedComment, ApplicationError> {
        let new_comment = NewComment::new(command.content, command.thread_id, command.owner)?;
        ensure_thread_exists(self.thread_repository.as_ref(), &new_comment.thread_id).await?;

        let added = self.comment_repository.add_comment(&new_comment).await?;
        tracing::debug!(comment_id = %added.id, thread_id = %new_comment.thread_id, "comment added");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, MockCommentRepository, MockThreadRepository};
    use mockall::Sequence;

    use super::*;

    fn command(content: &str) -> AddCommentCommand {
        AddCommentCommand {
            content: content.into(),
            thread_id: ThreadId::new("thread-123"),
            owner: UserId::new("user-123"),
        }
    }

    #[tokio::test]
    async fn adds_comment_to_existing_thread() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();

        threads
            .expect_thread_exists()
            .withf(|id| id.as_str() == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        comments
            .expect_add_comment()
            .withf(|comment| {
                comment.content == "sebuah komentar"
                    && comment.thread_id.as_str() == "thread-123"
                    && comment.owner.as_str() == "user-123"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|comment| {
                Ok(AddedComment::new("comment-123", comment.content.clone(), comment.owner.clone())
                    .unwrap())
            });

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let added = use_case.execute(command("sebuah komentar")).await.unwrap();

        assert_eq!(
            added,
            AddedComment::new("comment-123", "sebuah komentar", "user-123").unwrap()
        );
    }

    #[tokio::test]
    async fn missing_thread_stops_before_insert() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().returning(|_| Ok(false));
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment().never();

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(command("sebuah komentar")).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ThreadNotFound)
        ));
    }

    #[tokio::test]
    async fn empty_content_fails_before_any_repository_call() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().never();
        let mut comments = MockCommentRepository::new();
        comments.expect_add_comment().never();

        let use_case = AddCommentUseCase::new(Arc::new(threads), Arc::new(comments));
        let err = use_case.execute(command("")).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::CommentContentEmpty)
        ));
    }
}

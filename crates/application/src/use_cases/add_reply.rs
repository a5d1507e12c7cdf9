use std::sync::Arc;

use domain::{
    AddedReply, CommentId, CommentRepository, NewReply, ReplyRepository, ThreadId,
    ThreadRepository, UserId,
};

use crate::error::ApplicationError;
use crate::use_cases::guards::{ensure_comment_exists, ensure_thread_exists};

#[derive(Debug, Clone)]
pub struct AddReplyCommand {
    pub content: String,
    pub thread_id: ThreadId,
    pub comment_id: CommentId,
    pub owner: UserId,
}

pub struct AddReplyUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
}

impl AddReplyUseCase {
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

    pub async fn execute(&self, command: AddReplyCommand) -> Result<AddedReply, ApplicationError> {
        let new_reply = NewReply::new(
            command.content,
            command.thread_id,
            command.comment_id,
            command.owner,
        )?;
        ensure_thread_exists(self.thread_repository.as_ref(), &new_reply.thread_id).await?;
        ensure_comment_exists(self.comment_repository.as_ref(), &new_reply.comment_id).await?;

        let added = self.reply_repository.add_reply(&new_reply).await?;
        tracing::debug!(reply_id = %added.id, comment_id = %new_reply.comment_id, "reply added");
        Ok(added)
    }
}

#[cfg(test)]
mod tests {
    use domain::{DomainError, MockCommentRepository, MockReplyRepository, MockThreadRepository};
    use mockall::Sequence;

    use super::*;

    fn command(content: &str) -> AddReplyCommand {
        AddReplyCommand {
            content: content.into(),
            thread_id: ThreadId::new("thread-123"),
            comment_id: CommentId::new("comment-123"),
            owner: UserId::new("user-123"),
        }
    }

    #[tokio::test]
    async fn adds_reply_after_thread_and_comment_checks() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();
        let mut replies = MockReplyRepository::new();

        threads
            .expect_thread_exists()
            .withf(|id| id.as_str() == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        comments
            .expect_comment_exists()
            .withf(|id| id.as_str() == "comment-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        replies
            .expect_add_reply()
            .withf(|reply| {
                reply.content == "sebuah balasan"
                    && reply.thread_id.as_str() == "thread-123"
                    && reply.comment_id.as_str() == "comment-123"
                    && reply.owner.as_str() == "user-123"
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|reply| {
                Ok(AddedReply::new("reply-123", reply.content.clone(), reply.owner.clone()).unwrap())
            });

        let use_case =
            AddReplyUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));
        let added = use_case.execute(command("sebuah balasan")).await.unwrap();

        assert_eq!(
            added,
            AddedReply::new("reply-123", "sebuah balasan", "user-123").unwrap()
        );
    }

    #[tokio::test]
    async fn missing_comment_stops_before_insert() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().returning(|_| Ok(true));
        let mut comments = MockCommentRepository::new();
        comments.expect_comment_exists().returning(|_| Ok(false));
        let mut replies = MockReplyRepository::new();
        replies.expect_add_reply().never();

        let use_case =
            AddReplyUseCase::new(Arc::new(threads), Arc::new(comments), Arc::new(replies));
        let err = use_case.execute(command("sebuah balasan")).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::CommentNotFound)
        ));
    }

    #[tokio::test]
    async fn empty_content_fails_before_any_repository_call() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().never();
        let mut replies = MockReplyRepository::new();
        replies.expect_add_reply().never();

        let use_case = AddReplyUseCase::new(
            Arc::new(threads),
            Arc::new(MockCommentRepository::new()),
            Arc::new(replies),
        );
        let err = use_case.execute(command("")).await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ReplyContentEmpty)
        ));
    }
}

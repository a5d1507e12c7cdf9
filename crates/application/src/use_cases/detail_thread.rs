use std::sync::Arc;

use domain::{
    CommentId, CommentRepository, LikeRepository, ReplyRepository, ThreadDetail, ThreadId,
    ThreadRepository,
};

use crate::error::ApplicationError;
use crate::use_cases::guards::ensure_thread_exists;

/// 主题详情聚合：批量读取评论、回复与点赞数后在内存中拼装
pub struct DetailThreadUseCase {
    thread_repository: Arc<dyn ThreadRepository>,
    comment_repository: Arc<dyn CommentRepository>,
    reply_repository: Arc<dyn ReplyRepository>,
    like_repository: Arc<dyn LikeRepository>,
}

impl DetailThreadUseCase {
    pub fn new(
        thread_repository: Arc<dyn ThreadRepository>,
        comment_repository: Arc<dyn CommentRepository>,
        reply_repository: Arc<dyn ReplyRepository>,
        like_repository: Arc<dyn LikeRepository>,
    ) -> Self {
        Self {
            thread_repository,
            comment_repository,
            reply_repository,
            like_repository,
        }
    }

    pub async fn execute(&self, thread_id: &ThreadId) -> Result<ThreadDetail, ApplicationError> {
        ensure_thread_exists(self.thread_repository.as_ref(), thread_id).await?;

        let thread = self.thread_repository.get_thread_by_id(thread_id).await?;
        let comments = self
            .comment_repository
            .get_comments_by_thread_ids(std::slice::from_ref(thread_id))
            .await?;

        let comment_ids: Vec<CommentId> = comments.iter().map(|c| c.id.clone()).collect();
        let replies = self
            .reply_repository
            .get_replies_by_comment_ids(&comment_ids)
            .await?;
        let like_counts = self
            .like_repository
            .get_like_counts_by_comment_ids(&comment_ids)
            .await?;

        tracing::debug!(
            thread_id = %thread_id,
            comments = comments.len(),
            replies = replies.len(),
            "thread detail assembled"
        );
        Ok(ThreadDetail::assemble(thread, comments, replies, like_counts))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, TimeZone, Utc};
    use domain::{
        Comment, CommentLikeCount, DomainError, MockCommentRepository, MockLikeRepository,
        MockReplyRepository, MockThreadRepository, Reply, ReplyId, Thread, Timestamp,
        DELETED_COMMENT_CONTENT, DELETED_REPLY_CONTENT,
    };
    use mockall::Sequence;

    use super::*;

    fn at(minutes: i64) -> Timestamp {
        Utc.with_ymd_and_hms(2021, 8, 8, 7, 19, 9).unwrap() + Duration::minutes(minutes)
    }

    fn stored_thread() -> Thread {
        Thread {
            id: ThreadId::new("thread-123"),
            title: "sebuah thread".into(),
            body: "sebuah body thread".into(),
            date: at(0),
            username: "dicoding".into(),
        }
    }

    fn stored_comments() -> Vec<Comment> {
        vec![
            Comment {
                id: CommentId::new("comment-1"),
                thread_id: ThreadId::new("thread-123"),
                content: "komentar pertama".into(),
                date: at(1),
                username: "johndoe".into(),
                is_deleted: false,
            },
            Comment {
                id: CommentId::new("comment-2"),
                thread_id: ThreadId::new("thread-123"),
                content: "komentar kedua".into(),
                date: at(2),
                username: "dicoding".into(),
                is_deleted: true,
            },
        ]
    }

    fn stored_replies() -> Vec<Reply> {
        vec![Reply {
            id: ReplyId::new("reply-1"),
            comment_id: CommentId::new("comment-1"),
            content: "balasan".into(),
            date: at(3),
            username: "dicoding".into(),
            is_deleted: true,
        }]
    }

    #[tokio::test]
    async fn batches_reads_and_assembles_detail() {
        let mut seq = Sequence::new();
        let mut threads = MockThreadRepository::new();
        let mut comments = MockCommentRepository::new();
        let mut replies = MockReplyRepository::new();
        let mut likes = MockLikeRepository::new();

        threads
            .expect_thread_exists()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        threads
            .expect_get_thread_by_id()
            .withf(|id| id.as_str() == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(stored_thread()));
        comments
            .expect_get_comments_by_thread_ids()
            .withf(|ids| ids.len() == 1 && ids[0].as_str() == "thread-123")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(stored_comments()));
        replies
            .expect_get_replies_by_comment_ids()
            .withf(|ids| {
                ids.iter().map(|id| id.as_str()).collect::<Vec<_>>() == ["comment-1", "comment-2"]
            })
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(stored_replies()));
        likes
            .expect_get_like_counts_by_comment_ids()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(vec![CommentLikeCount {
                    comment_id: CommentId::new("comment-1"),
                    like_count: 2,
                }])
            });

        let use_case = DetailThreadUseCase::new(
            Arc::new(threads),
            Arc::new(comments),
            Arc::new(replies),
            Arc::new(likes),
        );
        let detail = use_case.execute(&ThreadId::new("thread-123")).await.unwrap();

        assert_eq!(detail.title, "sebuah thread");
        assert_eq!(detail.username, "dicoding");
        assert_eq!(detail.comments.len(), 2);

        let first = &detail.comments[0];
        assert_eq!(first.content, "komentar pertama");
        assert_eq!(first.like_count, 2);
        assert_eq!(first.replies.len(), 1);
        assert_eq!(first.replies[0].content, DELETED_REPLY_CONTENT);

        let second = &detail.comments[1];
        assert_eq!(second.content, DELETED_COMMENT_CONTENT);
        assert_eq!(second.like_count, 0);
        assert!(second.replies.is_empty());
    }

    #[tokio::test]
    async fn missing_thread_is_not_found() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().returning(|_| Ok(false));
        threads.expect_get_thread_by_id().never();
        let mut comments = MockCommentRepository::new();
        comments.expect_get_comments_by_thread_ids().never();

        let use_case = DetailThreadUseCase::new(
            Arc::new(threads),
            Arc::new(comments),
            Arc::new(MockReplyRepository::new()),
            Arc::new(MockLikeRepository::new()),
        );
        let err = use_case
            .execute(&ThreadId::new("thread-404"))
            .await
            .unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::ThreadNotFound)
        ));
    }

    #[tokio::test]
    async fn thread_without_comments_still_queries_in_batch() {
        let mut threads = MockThreadRepository::new();
        threads.expect_thread_exists().returning(|_| Ok(true));
        threads
            .expect_get_thread_by_id()
            .returning(|_| Ok(stored_thread()));
        let mut comments = MockCommentRepository::new();
        comments
            .expect_get_comments_by_thread_ids()
            .returning(|_| Ok(Vec::new()));
        let mut replies = MockReplyRepository::new();
        replies
            .expect_get_replies_by_comment_ids()
            .withf(|ids| ids.is_empty())
            .times(1)
            .returning(|_| Ok(Vec::new()));
        let mut likes = MockLikeRepository::new();
        likes
            .expect_get_like_counts_by_comment_ids()
            .times(1)
            .returning(|_| Ok(Vec::new()));

        let use_case = DetailThreadUseCase::new(
            Arc::new(threads),
            Arc::new(comments),
            Arc::new(replies),
            Arc::new(likes),
        );
        let detail = use_case.execute(&ThreadId::new("thread-123")).await.unwrap();
        assert!(detail.comments.is_empty());
    }
}

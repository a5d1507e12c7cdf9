//! 评论Repository接口定义

use async_trait::async_trait;

use crate::entities::comment::{AddedComment, Comment, NewComment};
use crate::errors::RepositoryResult;
use crate::value_objects::{CommentId, ThreadId, UserId};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait CommentRepository: Send + Sync {
    async fn add_comment(&self, comment: &NewComment) -> RepositoryResult<AddedComment>;

    /// 评论是否存在（已软删除的评论仍视为存在）
    async fn comment_exists(&self, comment_id: &CommentId) -> RepositoryResult<bool>;

    async fn is_comment_owner(
        &self,
        comment_id: &CommentId,
        user_id: &UserId,
    ) -> RepositoryResult<bool>;

    /// 软删除
    async fn delete_comment(&self, comment_id: &CommentId) -> RepositoryResult<()>;

    /// 批量读取评论，按日期升序
    async fn get_comments_by_thread_ids(
        &self,
        thread_ids: &[ThreadId],
    ) -> RepositoryResult<Vec<Comment>>;
}

//! 评论点赞Repository接口定义

use async_trait::async_trait;

use crate::entities::like::{CommentLike, CommentLikeCount};
use crate::errors::RepositoryResult;
use crate::value_objects::CommentId;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait LikeRepository: Send + Sync {
    async fn like_comment(&self, like: &CommentLike) -> RepositoryResult<()>;

    async fn unlike_comment(&self, like: &CommentLike) -> RepositoryResult<()>;

    async fn is_comment_liked(&self, like: &CommentLike) -> RepositoryResult<bool>;

    /// 批量统计点赞数；没有点赞的评论可以不出现在结果中
    async fn get_like_counts_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> RepositoryResult<Vec<CommentLikeCount>>;
}

//! 回复Repository接口定义

use async_trait::async_trait;

use crate::entities::reply::{AddedReply, NewReply, Reply};
use crate::errors::RepositoryResult;
use crate::value_objects::{CommentId, ReplyId, UserId};

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ReplyRepository: Send + Sync {
    async fn add_reply(&self, reply: &NewReply) -> RepositoryResult<AddedReply>;

    async fn reply_exists(&self, reply_id: &ReplyId) -> RepositoryResult<bool>;

    async fn is_reply_owner(&self, reply_id: &ReplyId, user_id: &UserId)
        -> RepositoryResult<bool>;

    /// 软删除
    async fn delete_reply(&self, reply_id: &ReplyId) -> RepositoryResult<()>;

    /// 批量读取回复，按日期升序
    async fn get_replies_by_comment_ids(
        &self,
        comment_ids: &[CommentId],
    ) -> RepositoryResult<Vec<Reply>>;
}

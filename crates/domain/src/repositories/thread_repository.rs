//! 主题Repository接口定义

use async_trait::async_trait;

use crate::entities::thread::{AddedThread, NewThread, Thread};
use crate::errors::RepositoryResult;
use crate::value_objects::ThreadId;

#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ThreadRepository: Send + Sync {
    /// 保存新主题
    async fn add_thread(&self, thread: &NewThread) -> RepositoryResult<AddedThread>;

    /// 主题是否存在
    async fn thread_exists(&self, thread_id: &ThreadId) -> RepositoryResult<bool>;

    /// 读取主题及作者用户名，不存在时返回 `RepositoryError::NotFound`
    async fn get_thread_by_id(&self, thread_id: &ThreadId) -> RepositoryResult<Thread>;
}

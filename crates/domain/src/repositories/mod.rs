//! Repository接口定义
//!
//! 定义数据访问层的抽象接口，遵循清洁架构原则，内层定义接口，外层实现接口。
//! 启用 `testing` 特性时为每个接口生成 `mockall` 模拟实现。

pub mod authentication_repository;
pub mod comment_repository;
pub mod like_repository;
pub mod reply_repository;
pub mod thread_repository;
pub mod user_repository;

pub use authentication_repository::AuthenticationRepository;
pub use comment_repository::CommentRepository;
pub use like_repository::LikeRepository;
pub use reply_repository::ReplyRepository;
pub use thread_repository::ThreadRepository;
pub use user_repository::UserRepository;

#[cfg(any(test, feature = "testing"))]
pub use authentication_repository::MockAuthenticationRepository;
#[cfg(any(test, feature = "testing"))]
pub use comment_repository::MockCommentRepository;
#[cfg(any(test, feature = "testing"))]
pub use like_repository::MockLikeRepository;
#[cfg(any(test, feature = "testing"))]
pub use reply_repository::MockReplyRepository;
#[cfg(any(test, feature = "testing"))]
pub use thread_repository::MockThreadRepository;
#[cfg(any(test, feature = "testing"))]
pub use user_repository::MockUserRepository;

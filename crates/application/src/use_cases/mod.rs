//! 用例编排
//!
//! 每个用例先做实体校验，再由外向内检查祖先资源存在性，
//! 删除类操作最后检查所有权，全部通过后才执行写入。

mod guards;

pub mod add_comment;
pub mod add_reply;
pub mod add_thread;
pub mod add_user;
pub mod delete_comment;
pub mod delete_reply;
pub mod detail_thread;
pub mod like_comment;
pub mod login_user;
pub mod logout_user;
pub mod refresh_authentication;

pub use add_comment::{AddCommentCommand, AddCommentUseCase};
pub use add_reply::{AddReplyCommand, AddReplyUseCase};
pub use add_thread::{AddThreadCommand, AddThreadUseCase};
pub use add_user::{AddUserCommand, AddUserUseCase};
pub use delete_comment::{DeleteCommentCommand, DeleteCommentUseCase};
pub use delete_reply::{DeleteReplyCommand, DeleteReplyUseCase};
pub use detail_thread::DetailThreadUseCase;
pub use like_comment::{LikeCommentCommand, LikeCommentUseCase};
pub use login_user::{LoginUserCommand, LoginUserUseCase};
pub use logout_user::{DeleteAuthenticationUseCase, LogoutUserUseCase};
pub use refresh_authentication::RefreshAuthenticationUseCase;

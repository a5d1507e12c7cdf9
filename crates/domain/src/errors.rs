//! 领域模型错误定义
//!
//! 每个变体对应一个稳定的错误代码（例如 `THREAD_NOT_FOUND`），
//! 由 Web 层的错误翻译器映射为 HTTP 状态码与提示信息。

use thiserror::Error;

/// 领域模型错误类型
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DomainError {
    /// 注册用户时缺少必要字段
    #[error("REGISTER_USER.NOT_CONTAIN_NEEDED_PROPERTY")]
    RegisterUserMissingProperty,

    /// 用户名超过 50 个字符
    #[error("REGISTER_USER.USERNAME_LIMIT_CHAR")]
    UsernameLimitChar,

    /// 用户名包含 `[A-Za-z0-9_]` 以外的字符
    #[error("REGISTER_USER.USERNAME_CONTAIN_RESTRICTED_CHARACTER")]
    UsernameRestrictedCharacter,

    /// 用户名已被占用
    #[error("REGISTER_USER.USERNAME_NOT_AVAILABLE")]
    UsernameNotAvailable,

    #[error("REGISTERED_USER.NOT_CONTAIN_NEEDED_PROPERTY")]
    RegisteredUserMissingProperty,

    /// 登录时用户名不存在
    #[error("USER_NOT_FOUND")]
    UserNotFound,

    #[error("NEW_AUTH.NOT_CONTAIN_NEEDED_PROPERTY")]
    NewAuthMissingProperty,

    /// 刷新令牌不在令牌表中（已注销或从未签发）
    #[error("REFRESH_TOKEN_NOT_FOUND")]
    RefreshTokenNotFound,

    #[error("ADD_THREAD.TITLE_EMPTY_STRING")]
    ThreadTitleEmpty,

    #[error("ADD_THREAD.OWNER_EMPTY_STRING")]
    ThreadOwnerEmpty,

    #[error("ADD_COMMENT.CONTENT_EMPTY_STRING")]
    CommentContentEmpty,

    #[error("ADD_COMMENT.OWNER_EMPTY_STRING")]
    CommentOwnerEmpty,

    #[error("ADD_REPLY.CONTENT_EMPTY_STRING")]
    ReplyContentEmpty,

    #[error("ADD_REPLY.OWNER_EMPTY_STRING")]
    ReplyOwnerEmpty,

    #[error("THREAD_NOT_FOUND")]
    ThreadNotFound,

    #[error("COMMENT_NOT_FOUND")]
    CommentNotFound,

    /// 请求者不是评论作者
    #[error("COMMENT_NOT_OWNER")]
    CommentNotOwner,

    #[error("REPLY_NOT_FOUND")]
    ReplyNotFound,

    /// 请求者不是回复作者
    #[error("REPLY_NOT_OWNER")]
    ReplyNotOwner,
}

impl DomainError {
    /// 稳定的错误代码，与 `Display` 输出一致。
    pub fn code(&self) -> String {
        self.to_string()
    }
}

/// 领域模型结果类型
pub type DomainResult<T> = Result<T, DomainError>;

/// 仓储层错误
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("record not found")]
    NotFound,
    /// 违反唯一约束
    #[error("record already exists")]
    Conflict,
    #[error("storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

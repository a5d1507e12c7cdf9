//! 应用层实现。
//!
//! 每个用例一个结构体，负责编排校验顺序（实体校验、祖先存在性、
//! 所有权）与仓储调用，并对外部适配器（密码哈希、令牌签发）做抽象。

pub mod container;
pub mod error;
pub mod password;
pub mod token;
pub mod use_cases;

pub use container::{UseCaseDependencies, UseCases};
pub use error::ApplicationError;
pub use password::{PasswordHasher, PasswordHasherError};
pub use token::{AuthenticationTokenManager, TokenError, TokenPayload};
pub use use_cases::*;

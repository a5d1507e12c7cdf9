//! 基础设施层实现。
//!
//! 提供 PostgreSQL 与内存两套仓储、bcrypt 密码哈希、JWT 令牌管理，
//! 实现应用/领域层定义的接口。

pub mod builder;
pub mod id;
pub mod memory;
pub mod migrations;
pub mod password;
pub mod repository;
pub mod token;

pub use builder::{Infrastructure, InfrastructureConfig, InfrastructureError};
pub use id::{IdGenerator, UuidIdGenerator};
pub use memory::InMemoryStorage;
pub use migrations::MIGRATOR;
pub use password::BcryptPasswordHasher;
pub use repository::{
    create_pg_pool, PgAuthenticationRepository, PgCommentRepository, PgLikeRepository,
    PgReplyRepository, PgStorage, PgThreadRepository, PgUserRepository,
};
pub use token::{JwtTokenManager, TokenConfig};

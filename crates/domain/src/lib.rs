//! 论坛系统核心领域模型
//!
//! 包含用户、主题、评论、回复、点赞等核心实体，
//! 实体构造时的字段校验，以及仓储接口定义。

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod value_objects;

// 重新导出常用类型
pub use entities::*;
pub use errors::*;
pub use repositories::*;
pub use value_objects::*;

//! Web API 层。
//!
//! 提供 Axum 路由，把 HTTP 请求委托给应用层用例，并把用例错误翻译为
//! 统一的 JSON 信封响应。

mod auth;
mod auth_routes;
mod comment_routes;
mod error;
mod like_routes;
mod reply_routes;
mod response;
mod routes;
mod state;
mod thread_routes;
mod user_routes;

pub use auth::AuthUser;
pub use error::{ApiError, PayloadError};
pub use routes::router;
pub use state::AppState;

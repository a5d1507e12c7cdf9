use std::sync::Arc;

use application::{AuthenticationTokenManager, UseCases};

#[derive(Clone)]
pub struct AppState {
    pub use_cases: Arc<UseCases>,
    /// 校验 Bearer 访问令牌
    pub token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl AppState {
    pub fn new(use_cases: Arc<UseCases>, token_manager: Arc<dyn AuthenticationTokenManager>) -> Self {
        Self {
            use_cases,
            token_manager,
        }
    }
}

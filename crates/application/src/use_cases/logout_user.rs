use std::sync::Arc;

use domain::{AuthenticationRepository, DomainError};

use crate::error::ApplicationError;

/// 注销：从令牌表中删除刷新令牌
pub struct LogoutUserUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
}

/// `DELETE /authentications` 使用的名称
pub type DeleteAuthenticationUseCase = LogoutUserUseCase;

impl LogoutUserUseCase {
    pub fn new(authentication_repository: Arc<dyn AuthenticationRepository>) -> Self {
        Self {
            authentication_repository,
        }
    }

    pub async fn execute(&self, refresh_token: &str) -> Result<(), ApplicationError> {
        if !self
            .authentication_repository
            .token_exists(refresh_token)
            .await?
        {
            return Err(DomainError::RefreshTokenNotFound.into());
        }

        self.authentication_repository
            .delete_token(refresh_token)
            .await?;
        Ok(())
    }
}

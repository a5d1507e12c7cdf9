use std::sync::Arc;

use domain::{AuthenticationRepository, DomainError};

use crate::{error::ApplicationError, token::AuthenticationTokenManager};

pub struct RefreshAuthenticationUseCase {
    authentication_repository: Arc<dyn AuthenticationRepository>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl RefreshAuthenticationUseCase {
    pub fn new(
        authentication_repository: Arc<dyn AuthenticationRepository>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            authentication_repository,
            token_manager,
        }
    }

    /// 用有效的刷新令牌换取新的访问令牌
    pub async fn execute(&self, refresh_token: &str) -> Result<String, ApplicationError> {
        self.token_manager
            .verify_refresh_token(refresh_token)
            .map_err(|err| {
                tracing::debug!(error = %err, "refresh token rejected");
                ApplicationError::InvalidRefreshToken
            })?;

        if !self
            .authentication_repository
            .token_exists(refresh_token)
            .await?
        {
            return Err(DomainError::RefreshTokenNotFound.into());
        }

        let payload = self.token_manager.decode_payload(refresh_token)?;
        Ok(self.token_manager.create_access_token(&payload)?)
    }
}

#[cfg(test)]
mod tests {
    use domain::{MockAuthenticationRepository, UserId};
    use mockall::Sequence;

    use super::*;
    use crate::token::{MockAuthenticationTokenManager, TokenError, TokenPayload};

    #[tokio::test]
    async fn issues_new_access_token_from_stored_refresh_token() {
        let mut seq = Sequence::new();
        let mut auths = MockAuthenticationRepository::new();
        let mut tokens = MockAuthenticationTokenManager::new();

        tokens
            .expect_verify_refresh_token()
            .withf(|token| token == "refresh_token")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));
        auths
            .expect_token_exists()
            .withf(|token| token == "refresh_token")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(true));
        tokens
            .expect_decode_payload()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| {
                Ok(TokenPayload {
                    id: UserId::new("user-123"),
                    username: "dicoding".into(),
                })
            });
        tokens
            .expect_create_access_token()
            .withf(|payload| payload.username == "dicoding")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("new_access_token".into()));

        let use_case = RefreshAuthenticationUseCase::new(Arc::new(auths), Arc::new(tokens));
        let access_token = use_case.execute("refresh_token").await.unwrap();
        assert_eq!(access_token, "new_access_token");
    }

    #[tokio::test]
    async fn invalid_signature_is_rejected_before_lookup() {
        let mut auths = MockAuthenticationRepository::new();
        auths.expect_token_exists().never();
        let mut tokens = MockAuthenticationTokenManager::new();
        tokens
            .expect_verify_refresh_token()
            .returning(|_| Err(TokenError::Invalid("bad signature".into())));

        let use_case = RefreshAuthenticationUseCase::new(Arc::new(auths), Arc::new(tokens));
        let err = use_case.execute("forged").await.unwrap_err();
        assert!(matches!(err, ApplicationError::InvalidRefreshToken));
    }

    #[tokio::test]
    async fn revoked_token_is_not_found() {
        let mut auths = MockAuthenticationRepository::new();
        auths.expect_token_exists().returning(|_| Ok(false));
        let mut tokens = MockAuthenticationTokenManager::new();
        tokens.expect_verify_refresh_token().returning(|_| Ok(()));
        tokens.expect_decode_payload().never();

        let use_case = RefreshAuthenticationUseCase::new(Arc::new(auths), Arc::new(tokens));
        let err = use_case.execute("refresh_token").await.unwrap_err();
        assert!(matches!(
            err,
            ApplicationError::Domain(DomainError::RefreshTokenNotFound)
        ));
    }
}

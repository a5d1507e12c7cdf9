use std::sync::Arc;

use domain::{AuthenticationRepository, DomainError, NewAuth, UserRepository};

use crate::{
    error::ApplicationError,
    password::PasswordHasher,
    token::{AuthenticationTokenManager, TokenPayload},
};

#[derive(Debug, Clone)]
pub struct LoginUserCommand {
    pub username: String,
    pub password: String,
}

pub struct LoginUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    authentication_repository: Arc<dyn AuthenticationRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
    token_manager: Arc<dyn AuthenticationTokenManager>,
}

impl LoginUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        authentication_repository: Arc<dyn AuthenticationRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
        token_manager: Arc<dyn AuthenticationTokenManager>,
    ) -> Self {
        Self {
            user_repository,
            authentication_repository,
            password_hasher,
            token_manager,
        }
    }

    pub async fn execute(&self, command: LoginUserCommand) -> Result<NewAuth, ApplicationError> {
        let password_hash = self
            .user_repository
            .get_password_by_username(&command.username)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let password_ok = self
            .password_hasher
            .verify(&command.password, &password_hash)
            .await?;
        if !password_ok {
            return Err(ApplicationError::Authentication);
        }

        let id = self
            .user_repository
            .get_id_by_username(&command.username)
            .await?
            .ok_or(DomainError::UserNotFound)?;

        let payload = TokenPayload {
            id,
            username: command.username,
        };
        let access_token = self.token_manager.create_access_token(&payload)?;
        let refresh_token = self.token_manager.create_refresh_token(&payload)?;
        let new_auth = NewAuth::new(access_token, refresh_token)?;

        self.authentication_repository
            .add_token(&new_auth.refresh_token)
            .await?;

        tracing::info!(user_id = %payload.id, "user logged in");
        Ok(new_auth)
    }
}

#[cfg(test)]
mod tests {
    use domain::{MockAuthenticationRepository, MockUserRepository, PasswordHash, UserId};
    use mockall::Sequence;

    use super::*;
    use crate::{password::MockPasswordHasher, token::MockAuthenticationTokenManager};

    fn command() -> LoginUserCommand {
        LoginUserCommand {
            username: "dicoding".into(),
            password: "secret".into(),
        }
    }

    #[tokio::test]
    async fn issues_and_stores_tokens_in_order() {
        let mut seq = Sequence::new();
        let mut users = MockUserRepository::new();
        let mut auths = MockAuthenticationRepository::new();
        let mut hasher = MockPasswordHasher::new();
        let mut tokens = MockAuthenticationTokenManager::new();

        users
            .expect_get_password_by_username()
            .withf(|username| username == "dicoding")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(PasswordHash::new("encrypted_password").unwrap())));
        hasher
            .expect_verify()
            .withf(|plain, hash| plain == "secret" && hash.as_str() == "encrypted_password")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_, _| Ok(true));
        users
            .expect_get_id_by_username()
            .withf(|username| username == "dicoding")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(Some(UserId::new("user-123"))));
        tokens
            .expect_create_access_token()
            .withf(|payload| payload.id.as_str() == "user-123" && payload.username == "dicoding")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("access_token".into()));
        tokens
            .expect_create_refresh_token()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("refresh_token".into()));
        auths
            .expect_add_token()
            .withf(|token| token == "refresh_token")
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(()));

        let use_case = LoginUserUseCase::new(
            Arc::new(users),
            Arc::new(auths),
            Arc::new(hasher),
            Arc::new(tokens),
        );
        let auth = use_case.execute(command()).await.unwrap();

        assert_eq!(auth, NewAuth::new("access_token", "refresh_token").unwrap());
    }

    #[tokio::test]
    async fn unknown_username_is_reported() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_password_by_username()
            .returning(|_| Ok(None));
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().never();

        let use_case = LoginUserUseCase::new(
            Arc::new(users),
            Arc::new(MockAuthenticationRepository::new()),
            Arc::new(hasher),
            Arc::new(MockAuthenticationTokenManager::new()),
        );
        let err = use_case.execute(command()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Domain(DomainError::UserNotFound)));
    }

    #[tokio::test]
    async fn wrong_password_fails_authentication_without_issuing_tokens() {
        let mut users = MockUserRepository::new();
        users
            .expect_get_password_by_username()
            .returning(|_| Ok(Some(PasswordHash::new("encrypted_password").unwrap())));
        users.expect_get_id_by_username().never();
        let mut hasher = MockPasswordHasher::new();
        hasher.expect_verify().returning(|_, _| Ok(false));
        let mut tokens = MockAuthenticationTokenManager::new();
        tokens.expect_create_access_token().never();
        let mut auths = MockAuthenticationRepository::new();
        auths.expect_add_token().never();

        let use_case = LoginUserUseCase::new(
            Arc::new(users),
            Arc::new(auths),
            Arc::new(hasher),
            Arc::new(tokens),
        );
        let err = use_case.execute(command()).await.unwrap_err();
        assert!(matches!(err, ApplicationError::Authentication));
    }
}

use std::sync::Arc;

use domain::{DomainError, RegisterUser, RegisteredUser, RepositoryError, UserRepository};

use crate::{error::ApplicationError, password::PasswordHasher};

#[derive(Debug, Clone)]
pub struct AddUserCommand {
    pub username: String,
    pub password: String,
    pub fullname: String,
}

pub struct AddUserUseCase {
    user_repository: Arc<dyn UserRepository>,
    password_hasher: Arc<dyn PasswordHasher>,
}

impl AddUserUseCase {
    pub fn new(
        user_repository: Arc<dyn UserRepository>,
        password_hasher: Arc<dyn PasswordHasher>,
    ) -> Self {
        Self {
            user_repository,
            password_hasher,
        }
    }

    pub async fn execute(&self, command: AddUserCommand) -> Result<RegisteredUser, ApplicationError> {
        let register_user = RegisterUser::new(command.username, command.password, command.fullname)?;

        if self
            .user_repository
            .username_exists(register_user.username.as_str())
            .await?
        {
            return Err(DomainError::UsernameNotAvailable.into());
        }

        let password_hash = self.password_hasher.hash(&register_user.password).await?;
        let registered = self
            .user_repository
            .add_user(&register_user.into_new_user(password_hash))
            .await
            .map_err(|err| match err {
                // 并发注册同名用户时由唯一约束兜底
                RepositoryError::Conflict => ApplicationError::from(DomainError::UsernameNotAvailable),
                other => other.into(),
            })?;

        tracing::info!(user_id = %registered.id, username = %registered.username, "user registered");
        Ok(registered)
    }
}

use std::sync::Arc;

use async_trait::async_trait;
use domain::{
    NewUser, PasswordHash, RegisteredUser, RepositoryResult, UserId, UserRepository,
};
use sqlx::{FromRow, PgPool};

use super::{invalid_data, map_sqlx_err};
use crate::id::{prefixed_id, IdGenerator};

#[derive(Debug, FromRow)]
struct RegisteredUserRecord {
    id: String,
    username: String,
    fullname: String,
}

impl TryFrom<RegisteredUserRecord> for RegisteredUser {
    type Error = domain::RepositoryError;

    fn try_from(value: RegisteredUserRecord) -> Result<Self, Self::Error> {
        RegisteredUser::new(value.id, value.username, value.fullname)
            .map_err(|err| invalid_data(err.to_string()))
    }
}

#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
    id_generator: Arc<dyn IdGenerator>,
}

impl PgUserRepository {
    pub fn new(pool: PgPool, id_generator: Arc<dyn IdGenerator>) -> Self {
        Self { pool, id_generator }
    }
}

#[async_trait]
impl UserRepository for PgUserRepository {
    async fn username_exists(&self, username: &str) -> RepositoryResult<bool> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS(SELECT 1 FROM users WHERE username = $1)")
            .bind(username)
            .fetch_one(&self.pool)
            .await
            .map_err(map_sqlx_err)
    }

    async fn add_user(&self, user: &NewUser) -> RepositoryResult<RegisteredUser> {
        let record = sqlx::query_as::<_, RegisteredUserRecord>(
            r#"
            INSERT INTO users (id, username, password, fullname)
            VALUES ($1, $2, $3, $4)
            RETURNING id, username, fullname
            "#,
        )
        .bind(prefixed_id("user", self.id_generator.as_ref()))
        .bind(user.username.as_str())
        .bind(user.password.as_str())
        .bind(&user.fullname)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx_err)?;

        RegisteredUser::try_from(record)
    }

    async fn get_password_by_username(
        &self,
        username: &str,
    ) -> RepositoryResult<Option<PasswordHash>> {
        let password =
            sqlx::query_scalar::<_, String>("SELECT password FROM users WHERE username = $1")
                .bind(username)
                .fetch_optional(&self.pool)
                .await
                .map_err(map_sqlx_err)?;

        password
            .map(|hash| PasswordHash::new(hash).map_err(|err| invalid_data(err.to_string())))
            .transpose()
    }

    async fn get_id_by_username(&self, username: &str) -> RepositoryResult<Option<UserId>> {
        let id = sqlx::query_scalar::<_, String>("SELECT id FROM users WHERE username = $1")
            .bind(username)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_err)?;

        Ok(id.map(UserId::from))
    }
}

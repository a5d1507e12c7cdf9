//! JWT 令牌管理
//!
//! 访问令牌与刷新令牌使用各自的 HS256 密钥。访问令牌带 `exp`，
//! 刷新令牌不过期，依靠令牌表撤销。每个令牌带随机 `jti`，
//! 同一秒内多次登录也不会签出相同的刷新令牌。

use std::collections::HashSet;

use application::{AuthenticationTokenManager, TokenError, TokenPayload};
use chrono::{Duration, Utc};
use domain::UserId;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone)]
pub struct TokenConfig {
    pub access_token_key: String,
    pub refresh_token_key: String,
    pub access_token_age_seconds: i64,
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    id: String,
    username: String,
    iat: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    exp: Option<i64>,
    jti: String,
}

impl From<Claims> for TokenPayload {
    fn from(claims: Claims) -> Self {
        TokenPayload {
            id: UserId::from(claims.id),
            username: claims.username,
        }
    }
}

#[derive(Clone)]
pub struct JwtTokenManager {
    access_encoding: EncodingKey,
    access_decoding: DecodingKey,
    refresh_encoding: EncodingKey,
    refresh_decoding: DecodingKey,
    access_token_age: Duration,
}

impl JwtTokenManager {
    pub fn new(config: &TokenConfig) -> Self {
        Self {
            access_encoding: EncodingKey::from_secret(config.access_token_key.as_bytes()),
            access_decoding: DecodingKey::from_secret(config.access_token_key.as_bytes()),
            refresh_encoding: EncodingKey::from_secret(config.refresh_token_key.as_bytes()),
            refresh_decoding: DecodingKey::from_secret(config.refresh_token_key.as_bytes()),
            access_token_age: Duration::seconds(config.access_token_age_seconds),
        }
    }

    fn claims(payload: &TokenPayload, exp: Option<i64>) -> Claims {
        Claims {
            id: payload.id.to_string(),
            username: payload.username.clone(),
            iat: Utc::now().timestamp(),
            exp,
            jti: Uuid::new_v4().to_string(),
        }
    }

    fn access_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = 0;
        validation
    }

    fn refresh_validation() -> Validation {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.required_spec_claims = HashSet::new();
        validation.validate_exp = false;
        validation
    }

    fn decode_refresh(&self, token: &str) -> Result<Claims, TokenError> {
        decode::<Claims>(token, &self.refresh_decoding, &Self::refresh_validation())
            .map(|data| data.claims)
            .map_err(|err| TokenError::Invalid(err.to_string()))
    }
}

impl AuthenticationTokenManager for JwtTokenManager {
    fn create_access_token(&self, payload: &TokenPayload) -> Result<String, TokenError> {
        let exp = (Utc::now() + self.access_token_age).timestamp();
        encode(
            &Header::new(Algorithm::HS256),
            &Self::claims(payload, Some(exp)),
            &self.access_encoding,
        )
        .map_err(|err| TokenError::Encode(err.to_string()))
    }

    fn create_refresh_token(&self, payload: &TokenPayload) -> Result<String, TokenError> {
        encode(
            &Header::new(Algorithm::HS256),
            &Self::claims(payload, None),
            &self.refresh_encoding,
        )
        .map_err(|err| TokenError::Encode(err.to_string()))
    }

    fn verify_refresh_token(&self, token: &str) -> Result<(), TokenError> {
        self.decode_refresh(token).map(|_| ())
    }

    fn verify_access_token(&self, token: &str) -> Result<TokenPayload, TokenError> {
        decode::<Claims>(token, &self.access_decoding, &Self::access_validation())
            .map(|data| data.claims.into())
            .map_err(|err| TokenError::Invalid(err.to_string()))
    }

    fn decode_payload(&self, token: &str) -> Result<TokenPayload, TokenError> {
        self.decode_refresh(token).map(TokenPayload::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn manager(age: i64) -> JwtTokenManager {
        JwtTokenManager::new(&TokenConfig {
            access_token_key: "access-secret-key-for-tests-0123456789".into(),
            refresh_token_key: "refresh-secret-key-for-tests-0123456789".into(),
            access_token_age_seconds: age,
        })
    }

    fn payload() -> TokenPayload {
        TokenPayload {
            id: UserId::new("user-123"),
            username: "dicoding".into(),
        }
    }

    #[test]
    fn access_token_round_trips_payload() {
        let manager = manager(3000);
        let token = manager.create_access_token(&payload()).unwrap();
        assert_eq!(manager.verify_access_token(&token).unwrap(), payload());
    }

    #[test]
    fn refresh_token_is_not_a_valid_access_token() {
        let manager = manager(3000);
        let refresh = manager.create_refresh_token(&payload()).unwrap();

        assert!(manager.verify_refresh_token(&refresh).is_ok());
        assert_eq!(manager.decode_payload(&refresh).unwrap(), payload());
        assert!(manager.verify_access_token(&refresh).is_err());
    }

    #[test]
    fn access_token_is_not_a_valid_refresh_token() {
        let manager = manager(3000);
        let access = manager.create_access_token(&payload()).unwrap();
        assert!(matches!(
            manager.verify_refresh_token(&access),
            Err(TokenError::Invalid(_))
        ));
    }

    #[test]
    fn expired_access_token_is_rejected() {
        let manager = manager(-10);
        let token = manager.create_access_token(&payload()).unwrap();
        assert!(manager.verify_access_token(&token).is_err());
    }

    #[test]
    fn consecutive_refresh_tokens_differ() {
        let manager = manager(3000);
        let first = manager.create_refresh_token(&payload()).unwrap();
        let second = manager.create_refresh_token(&payload()).unwrap();
        assert_ne!(first, second);
    }
}

//! Bearer 令牌认证
//!
//! 受保护的路由通过 `AuthUser` 提取器取得当前用户。

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use domain::UserId;

use crate::{error::ApiError, state::AppState};

const MISSING_AUTHENTICATION: &str = "Missing authentication";
const INVALID_TOKEN: &str = "token tidak valid";

/// 已认证的请求者
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub id: UserId,
    pub username: String,
}

/// 从 `Authorization: Bearer <token>` 中取出令牌
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|value| value.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers)
            .ok_or_else(|| ApiError::unauthorized(MISSING_AUTHENTICATION))?;

        let payload = state.token_manager.verify_access_token(token).map_err(|err| {
            tracing::debug!(error = %err, "rejected access token");
            ApiError::unauthorized(INVALID_TOKEN)
        })?;

        Ok(AuthUser {
            id: payload.id,
            username: payload.username,
        })
    }
}

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use application::LoginUserCommand;

use crate::{
    error::{ApiError, PayloadError},
    response::{success, success_without_data},
    state::AppState,
};

/// 登录、刷新与注销
pub fn auth_routes() -> Router<AppState> {
    Router::new().route(
        "/authentications",
        post(login).put(refresh_authentication).delete(logout),
    )
}

#[derive(Debug, Deserialize)]
struct LoginPayload {
    username: Option<String>,
    password: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RefreshTokenPayload {
    refresh_token: Option<String>,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|value| !value.is_empty())
}

/// 取出非空的 `refreshToken`，否则返回对应端点的请求体错误
fn refresh_token(
    payload: Result<Json<RefreshTokenPayload>, JsonRejection>,
    error: PayloadError,
) -> Result<String, PayloadError> {
    payload
        .ok()
        .and_then(|Json(payload)| non_empty(payload.refresh_token))
        .ok_or(error)
}

async fn login(
    State(state): State<AppState>,
    payload: Result<Json<LoginPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|_| PayloadError::UserLogin)?;
    let (Some(username), Some(password)) =
        (non_empty(payload.username), non_empty(payload.password))
    else {
        return Err(PayloadError::UserLogin.into());
    };

    let auth = state
        .use_cases
        .login_user
        .execute(LoginUserCommand { username, password })
        .await?;

    Ok(success(StatusCode::CREATED, auth))
}

async fn refresh_authentication(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let token = refresh_token(payload, PayloadError::RefreshAuthentication)?;
    let access_token = state
        .use_cases
        .refresh_authentication
        .execute(&token)
        .await?;

    Ok(success(StatusCode::OK, json!({ "accessToken": access_token })))
}

async fn logout(
    State(state): State<AppState>,
    payload: Result<Json<RefreshTokenPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let token = refresh_token(payload, PayloadError::DeleteAuthentication)?;
    state
        .use_cases
        .delete_authentication
        .execute(&token)
        .await?;

    Ok(success_without_data())
}

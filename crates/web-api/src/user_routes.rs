use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::Response,
    routing::post,
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use application::AddUserCommand;

use crate::{
    error::{ApiError, PayloadError},
    response::success,
    state::AppState,
};

/// 用户注册路由
pub fn user_routes() -> Router<AppState> {
    Router::new().route("/users", post(register_user))
}

#[derive(Debug, Deserialize)]
struct RegisterPayload {
    username: Option<String>,
    password: Option<String>,
    fullname: Option<String>,
}

async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|_| PayloadError::RegisterUser)?;

    // 缺失字段按空串处理，由实体校验给出统一的错误
    let added_user = state
        .use_cases
        .add_user
        .execute(AddUserCommand {
            username: payload.username.unwrap_or_default(),
            password: payload.password.unwrap_or_default(),
            fullname: payload.fullname.unwrap_or_default(),
        })
        .await?;

    Ok(success(
        StatusCode::CREATED,
        json!({ "addedUser": added_user }),
    ))
}

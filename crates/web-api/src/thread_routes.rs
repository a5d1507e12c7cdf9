use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use application::AddThreadCommand;
use domain::ThreadId;

use crate::{
    auth::AuthUser,
    error::{ApiError, PayloadError},
    response::success,
    state::AppState,
};

pub fn thread_routes() -> Router<AppState> {
    Router::new()
        .route("/threads", post(add_thread))
        .route("/threads/{thread_id}", get(thread_detail))
}

#[derive(Debug, Deserialize)]
struct ThreadPayload {
    title: Option<String>,
    body: Option<String>,
}

async fn add_thread(
    State(state): State<AppState>,
    user: AuthUser,
    payload: Result<Json<ThreadPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(payload) = payload.map_err(|_| PayloadError::Thread)?;
    let (Some(title), Some(body)) = (payload.title, payload.body) else {
        return Err(PayloadError::Thread.into());
    };

    let added_thread = state
        .use_cases
        .add_thread
        .execute(AddThreadCommand {
            title,
            body,
            owner: user.id,
        })
        .await?;

    Ok(success(
        StatusCode::CREATED,
        json!({ "addedThread": added_thread }),
    ))
}

async fn thread_detail(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
) -> Result<Response, ApiError> {
    let thread = state
        .use_cases
        .detail_thread
        .execute(&ThreadId::from(thread_id))
        .await?;

    Ok(success(StatusCode::OK, json!({ "thread": thread })))
}

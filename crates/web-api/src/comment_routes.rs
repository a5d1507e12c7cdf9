use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use application::{AddCommentCommand, DeleteCommentCommand};
use domain::{CommentId, ThreadId};

use crate::{
    auth::AuthUser,
    error::{ApiError, PayloadError},
    response::{success, success_without_data},
    state::AppState,
};

pub fn comment_routes() -> Router<AppState> {
    Router::new()
        .route("/threads/{thread_id}/comments", post(add_comment))
        .route(
            "/threads/{thread_id}/comments/{comment_id}",
            delete(delete_comment),
        )
}

#[derive(Debug, Deserialize)]
struct CommentPayload {
    content: Option<String>,
}

async fn add_comment(
    State(state): State<AppState>,
    Path(thread_id): Path<String>,
    user: AuthUser,
    payload: Result<Json<CommentPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let content = payload
        .ok()
        .and_then(|Json(payload)| payload.content)
        .ok_or(PayloadError::Comment)?;

    let added_comment = state
        .use_cases
        .add_comment
        .execute(AddCommentCommand {
            content,
            thread_id: ThreadId::from(thread_id),
            owner: user.id,
        })
        .await?;

    Ok(success(
        StatusCode::CREATED,
        json!({ "addedComment": added_comment }),
    ))
}

async fn delete_comment(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    user: AuthUser,
) -> Result<Response, ApiError> {
    state
        .use_cases
        .delete_comment
        .execute(DeleteCommentCommand {
            thread_id: ThreadId::from(thread_id),
            comment_id: CommentId::from(comment_id),
            requester: user.id,
        })
        .await?;

    Ok(success_without_data())
}

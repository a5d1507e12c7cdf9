use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::Response,
    routing::{delete, post},
    Json, Router,
};
use serde::Deserialize;
use serde_json::json;

use application::{AddReplyCommand, DeleteReplyCommand};
use domain::{CommentId, ReplyId, ThreadId};

use crate::{
    auth::AuthUser,
    error::{ApiError, PayloadError},
    response::{success, success_without_data},
    state::AppState,
};

pub fn reply_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies",
            post(add_reply),
        )
        .route(
            "/threads/{thread_id}/comments/{comment_id}/replies/{reply_id}",
            delete(delete_reply),
        )
}

#[derive(Debug, Deserialize)]
struct ReplyPayload {
    content: Option<String>,
}

async fn add_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    user: AuthUser,
    payload: Result<Json<ReplyPayload>, JsonRejection>,
) -> Result<Response, ApiError> {
    let content = payload
        .ok()
        .and_then(|Json(payload)| payload.content)
        .ok_or(PayloadError::Reply)?;

    let added_reply = state
        .use_cases
        .add_reply
        .execute(AddReplyCommand {
            content,
            thread_id: ThreadId::from(thread_id),
            comment_id: CommentId::from(comment_id),
            owner: user.id,
        })
        .await?;

    Ok(success(
        StatusCode::CREATED,
        json!({ "addedReply": added_reply }),
    ))
}

async fn delete_reply(
    State(state): State<AppState>,
    Path((thread_id, comment_id, reply_id)): Path<(String, String, String)>,
    user: AuthUser,
) -> Result<Response, ApiError> {
    state
        .use_cases
        .delete_reply
        .execute(DeleteReplyCommand {
            thread_id: ThreadId::from(thread_id),
            comment_id: CommentId::from(comment_id),
            reply_id: ReplyId::from(reply_id),
            requester: user.id,
        })
        .await?;

    Ok(success_without_data())
}

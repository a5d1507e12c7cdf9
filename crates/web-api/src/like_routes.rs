use axum::{
    extract::{Path, State},
    response::Response,
    routing::put,
    Router,
};

use application::LikeCommentCommand;
use domain::{CommentId, ThreadId};

use crate::{auth::AuthUser, error::ApiError, response::success_without_data, state::AppState};

/// 点赞开关：已赞则取消，未赞则点赞
pub fn like_routes() -> Router<AppState> {
    Router::new().route(
        "/threads/{thread_id}/comments/{comment_id}/likes",
        put(toggle_like),
    )
}

async fn toggle_like(
    State(state): State<AppState>,
    Path((thread_id, comment_id)): Path<(String, String)>,
    user: AuthUser,
) -> Result<Response, ApiError> {
    state
        .use_cases
        .like_comment
        .execute(LikeCommentCommand {
            thread_id: ThreadId::from(thread_id),
            comment_id: CommentId::from(comment_id),
            user_id: user.id,
        })
        .await?;

    Ok(success_without_data())
}

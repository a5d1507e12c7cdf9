use axum::{http::StatusCode, routing::get, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::{
    auth_routes::auth_routes, comment_routes::comment_routes, like_routes::like_routes,
    reply_routes::reply_routes, state::AppState, thread_routes::thread_routes,
    user_routes::user_routes,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(user_routes())
        .merge(auth_routes())
        .merge(thread_routes())
        .merge(comment_routes())
        .merge(reply_routes())
        .merge(like_routes())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

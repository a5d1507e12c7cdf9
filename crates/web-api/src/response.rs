//! 成功响应信封：`{"status":"success","data":{...}}`

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

#[derive(Debug, Serialize)]
struct SuccessBody<T> {
    status: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    data: Option<T>,
}

pub fn success<T: Serialize>(status: StatusCode, data: T) -> Response {
    (
        status,
        Json(SuccessBody {
            status: "success",
            data: Some(data),
        }),
    )
        .into_response()
}

/// 无数据的 200 响应
pub fn success_without_data() -> Response {
    (
        StatusCode::OK,
        Json(SuccessBody::<()> {
            status: "success",
            data: None,
        }),
    )
        .into_response()
}

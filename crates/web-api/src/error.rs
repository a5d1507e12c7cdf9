//! 错误翻译
//!
//! 把领域/应用层的错误代码映射为 HTTP 状态码和面向用户的提示信息。
//! 未识别的错误统一记录日志并返回 500。

use application::ApplicationError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain::DomainError;
use serde::Serialize;
use thiserror::Error;

const INTERNAL_SERVER_ERROR_MESSAGE: &str = "internal server error";

const REGISTER_USER_MISSING_PROPERTY: &str =
    "tidak dapat membuat user baru karena properti yang dibutuhkan tidak ada";
const THREAD_PAYLOAD: &str =
    "tidak dapat membuat thread karena properti yang dibutuhkan tidak ada/tidak sesuai";
const COMMENT_PAYLOAD: &str =
    "tidak dapat membuat komentar karena properti yang dibutuhkan tidak ada/tidak sesuai";
const REPLY_PAYLOAD: &str =
    "tidak dapat membuat balasan karena properti yang dibutuhkan tidak ada/tidak sesuai";
const NOT_OWNER: &str = "anda tidak berhak mengakses resource ini";

/// 请求体缺少字段或字段类型不符
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PayloadError {
    #[error("REGISTER_USER.NOT_CONTAIN_NEEDED_PROPERTY")]
    RegisterUser,
    #[error("USER_LOGIN.NOT_CONTAIN_NEEDED_PROPERTY")]
    UserLogin,
    #[error("REFRESH_AUTHENTICATION.NOT_CONTAIN_NEEDED_PROPERTY")]
    RefreshAuthentication,
    #[error("DELETE_AUTHENTICATION.NOT_CONTAIN_NEEDED_PROPERTY")]
    DeleteAuthentication,
    #[error("THREAD.NOT_CONTAIN_NEEDED_PROPERTY")]
    Thread,
    #[error("COMMENT.NOT_CONTAIN_NEEDED_PROPERTY")]
    Comment,
    #[error("REPLY.NOT_CONTAIN_NEEDED_PROPERTY")]
    Reply,
}

impl PayloadError {
    fn message(self) -> &'static str {
        match self {
            PayloadError::RegisterUser => REGISTER_USER_MISSING_PROPERTY,
            PayloadError::UserLogin => {
                "tidak dapat login karena properti yang dibutuhkan tidak ada/tidak sesuai"
            }
            PayloadError::RefreshAuthentication => {
                "tidak dapat memperbarui token karena properti yang dibutuhkan tidak ada/tidak sesuai"
            }
            PayloadError::DeleteAuthentication => {
                "tidak dapat menghapus token karena properti yang dibutuhkan tidak ada/tidak sesuai"
            }
            PayloadError::Thread => THREAD_PAYLOAD,
            PayloadError::Comment => COMMENT_PAYLOAD,
            PayloadError::Reply => REPLY_PAYLOAD,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub status: &'static str,
    pub message: String,
}

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: ErrorBody,
}

impl ApiError {
    /// 客户端错误，信封状态为 `fail`
    pub fn fail(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            body: ErrorBody {
                status: "fail",
                message: message.into(),
            },
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::fail(StatusCode::BAD_REQUEST, message)
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::fail(StatusCode::UNAUTHORIZED, message)
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::fail(StatusCode::FORBIDDEN, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::fail(StatusCode::NOT_FOUND, message)
    }

    pub fn internal_server_error() -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: ErrorBody {
                status: "error",
                message: INTERNAL_SERVER_ERROR_MESSAGE.into(),
            },
        }
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.body.message
    }
}

impl From<PayloadError> for ApiError {
    fn from(error: PayloadError) -> Self {
        ApiError::bad_request(error.message())
    }
}

/// 已知的领域错误代码到 (状态码, 提示) 的映射
fn translate_domain(error: DomainError) -> Option<(StatusCode, &'static str)> {
    use DomainError::*;

    let translated = match error {
        RegisterUserMissingProperty => (StatusCode::BAD_REQUEST, REGISTER_USER_MISSING_PROPERTY),
        UsernameLimitChar => (
            StatusCode::BAD_REQUEST,
            "tidak dapat membuat user baru karena karakter username melebihi batas limit",
        ),
        UsernameRestrictedCharacter => (
            StatusCode::BAD_REQUEST,
            "tidak dapat membuat user baru karena username mengandung karakter terlarang",
        ),
        UsernameNotAvailable => (StatusCode::BAD_REQUEST, "username tidak tersedia"),
        UserNotFound => (StatusCode::BAD_REQUEST, "user tidak ditemukan"),
        RefreshTokenNotFound => (
            StatusCode::BAD_REQUEST,
            "refresh token tidak ditemukan di database",
        ),
        ThreadTitleEmpty | ThreadOwnerEmpty => (StatusCode::BAD_REQUEST, THREAD_PAYLOAD),
        CommentContentEmpty | CommentOwnerEmpty => (StatusCode::BAD_REQUEST, COMMENT_PAYLOAD),
        ReplyContentEmpty | ReplyOwnerEmpty => (StatusCode::BAD_REQUEST, REPLY_PAYLOAD),
        ThreadNotFound => (StatusCode::NOT_FOUND, "thread tidak ditemukan"),
        CommentNotFound => (StatusCode::NOT_FOUND, "komentar tidak ditemukan"),
        ReplyNotFound => (StatusCode::NOT_FOUND, "balasan tidak ditemukan"),
        CommentNotOwner | ReplyNotOwner => (StatusCode::FORBIDDEN, NOT_OWNER),
        // 仓储返回了不完整的数据，属于服务端问题
        RegisteredUserMissingProperty | NewAuthMissingProperty => return None,
    };
    Some(translated)
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain(domain_error) => match translate_domain(domain_error) {
                Some((status, message)) => ApiError::fail(status, message),
                None => {
                    tracing::error!(code = %domain_error.code(), "untranslated domain error");
                    ApiError::internal_server_error()
                }
            },
            ApplicationError::Authentication => {
                ApiError::unauthorized("kredensial yang Anda masukkan salah")
            }
            ApplicationError::InvalidRefreshToken => {
                ApiError::bad_request("refresh token tidak valid")
            }
            other => {
                tracing::error!(error = %other, "unhandled application error");
                ApiError::internal_server_error()
            }
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

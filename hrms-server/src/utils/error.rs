//! 统一错误处理
//!
//! 请求级错误类型 [`AppError`] 及其 HTTP 映射。
//!
//! # 状态码
//!
//! | 变体 | 状态码 | error |
//! |------|--------|-------|
//! | InvalidIdentifier | 400 | invalid_identifier |
//! | MalformedBody | 400 | malformed_body |
//! | InsertRejected | 400 | insert_rejected |
//! | NotFound | 404 | not_found |
//! | Database | 500 | database_error |
//! | Internal | 500 | internal_error |
//!
//! 响应体携带原始错误文本：
//!
//! ```json
//! { "error": "invalid_identifier", "message": "'abc' is not a valid id: ..." }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use tracing::error;

use crate::db::RepoError;

/// 错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

/// 应用错误枚举
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // ========== 客户端错误 (4xx) ==========
    #[error("Invalid identifier: {0}")]
    /// 路径 id 不是合法的 24 位十六进制 (400)
    InvalidIdentifier(String),

    #[error("Malformed body: {0}")]
    /// 请求体无法解析 (400)
    MalformedBody(String),

    #[error("Insert rejected: {0}")]
    /// 写入被存储拒绝 (400，仅创建路径)
    InsertRejected(String),

    #[error("Resource not found: {0}")]
    /// 资源不存在 (404)
    NotFound(String),

    // ========== 系统错误 (5xx) ==========
    #[error("Database error: {0}")]
    /// 数据库错误 (500)
    Database(String),

    #[error("Internal server error: {0}")]
    /// 内部错误 (500)
    Internal(String),
}

impl AppError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn insert_rejected(msg: impl Into<String>) -> Self {
        Self::InsertRejected(msg.into())
    }

    /// HTTP 状态码与错误码
    pub fn status(&self) -> (StatusCode, &'static str) {
        match self {
            AppError::InvalidIdentifier(_) => (StatusCode::BAD_REQUEST, "invalid_identifier"),
            AppError::MalformedBody(_) => (StatusCode::BAD_REQUEST, "malformed_body"),
            AppError::InsertRejected(_) => (StatusCode::BAD_REQUEST, "insert_rejected"),
            AppError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            AppError::Database(_) => (StatusCode::INTERNAL_SERVER_ERROR, "database_error"),
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error"),
        }
    }

    fn message(&self) -> &str {
        match self {
            AppError::InvalidIdentifier(msg)
            | AppError::MalformedBody(msg)
            | AppError::InsertRejected(msg)
            | AppError::NotFound(msg)
            | AppError::Database(msg)
            | AppError::Internal(msg) => msg,
        }
    }
}

impl From<RepoError> for AppError {
    fn from(e: RepoError) -> Self {
        match e {
            RepoError::InvalidIdentifier(msg) => AppError::InvalidIdentifier(msg),
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Decode(msg) => AppError::Internal(format!("Decode failure: {}", msg)),
            RepoError::Database(msg) => AppError::Database(msg),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();

        match &self {
            AppError::Database(msg) => {
                error!(target: "database", error = %msg, "Database error occurred");
            }
            AppError::Internal(msg) => {
                error!(target: "internal", error = %msg, "Internal error occurred");
            }
            _ => {}
        }

        let body = Json(ErrorResponse {
            error: code.to_string(),
            message: self.message().to_string(),
        });

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::InvalidIdentifier("x".into()).status().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::MalformedBody("x".into()).status().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::insert_rejected("x").status().0,
            StatusCode::BAD_REQUEST
        );
        assert_eq!(AppError::not_found("x").status().0, StatusCode::NOT_FOUND);
        assert_eq!(
            AppError::database("x").status().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::internal("x").status().0,
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_repo_error_conversion() {
        assert!(matches!(
            AppError::from(RepoError::InvalidIdentifier("x".into())),
            AppError::InvalidIdentifier(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::NotFound("x".into())),
            AppError::NotFound(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::Decode("x".into())),
            AppError::Internal(_)
        ));
        assert!(matches!(
            AppError::from(RepoError::Database("x".into())),
            AppError::Database(_)
        ));
    }

    #[tokio::test]
    async fn test_response_carries_raw_message() {
        let response = AppError::database("connection refused").into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .unwrap();
        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error, "database_error");
        assert_eq!(body.message, "connection refused");
    }
}

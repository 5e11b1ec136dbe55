//! 错误处理模块
//!
//! 存储层、服务层与 API 层共用的错误类型，
//! 以 `{ "error": ..., "code": ... }` 的形式返回给客户端。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::loader::ConfigValidationError;

/// 应用程序错误类型
#[derive(Error, Debug)]
pub enum AppError {
    /// 存储错误
    #[error("Database error: {0}")]
    Database(String),

    /// 资源不存在
    #[error("{0}")]
    NotFound(String),

    /// 请求字段缺失或无效
    #[error("{0}")]
    Validation(String),

    /// 配置错误
    #[error("Configuration error: {0}")]
    Config(String),

    /// 内部错误
    #[error("Internal server error: {0}")]
    Internal(String),

    /// IO 错误
    #[error("IO error: {0}")]
    Io(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}

impl From<figment::Error> for AppError {
    fn from(e: figment::Error) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<ConfigValidationError> for AppError {
    fn from(e: ConfigValidationError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(e: surrealdb::Error) -> Self {
        AppError::Database(e.to_string())
    }
}

/// AppError 的 Axum 响应实现
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code) = (&self).into();
        if status >= 500 {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorResponse::new(&code, &self.to_string()));
        (
            StatusCode::from_u16(status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            body,
        )
            .into_response()
    }
}

/// 错误响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// 可读的错误信息
    pub error: String,
    /// 错误码
    pub code: String,
}

impl ErrorResponse {
    pub fn new(code: &str, message: &str) -> Self {
        Self {
            error: message.to_string(),
            code: code.to_string(),
        }
    }
}

/// HTTP 状态码映射
impl From<&AppError> for (u16, String) {
    fn from(err: &AppError) -> (u16, String) {
        match err {
            AppError::NotFound(_) => (404, "NOT_FOUND".to_string()),
            AppError::Validation(_) => (400, "BAD_REQUEST".to_string()),
            AppError::Database(_) => (500, "DATABASE_ERROR".to_string()),
            _ => (500, "INTERNAL_ERROR".to_string()),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, AppError>;

//! 客户端错误类型

use thiserror::Error;

/// 规划器客户端错误
#[derive(Error, Debug)]
pub enum PlannerError {
    /// 请求发送前的校验失败
    #[error("{0}")]
    Validation(String),

    /// 传输失败
    #[error("Request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// 非 2xx 响应
    #[error("HTTP error! status: {status}: {message}")]
    Status { status: u16, message: String },
}

impl PlannerError {
    pub fn validation(message: impl Into<String>) -> Self {
        PlannerError::Validation(message.into())
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;

//! 可观测性模块
//!
//! 结构化日志初始化与健康检查端点。

use axum::{Json, response::IntoResponse};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::config::LoggingConfig;

/// 健康检查响应体
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthStatus {
    pub status: String,
    /// RFC 3339 timestamp of the check
    pub time: String,
}

/// 存活检查
pub async fn health_check() -> impl IntoResponse {
    Json(HealthStatus {
        status: "ok".to_string(),
        time: Utc::now().to_rfc3339(),
    })
}

/// Filter directives: `RUST_LOG` wins, then the configured level
pub fn env_filter(logging: &LoggingConfig, service_name: &str) -> EnvFilter {
    EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{0},{1}={0}", logging.level, service_name)))
}

/// 初始化全局 tracing subscriber
pub fn init_tracing(
    logging: &LoggingConfig,
    service_name: &str,
) -> Result<(), tracing_subscriber::util::TryInitError> {
    let filter = env_filter(logging, service_name);

    if logging.structured {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).with_line_number(true))
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_line_number(true))
            .try_init()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn test_health_check_reports_ok() {
        let response = health_check().await.into_response();
        assert_eq!(response.status(), axum::http::StatusCode::OK);

        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let status: HealthStatus = serde_json::from_slice(&body).unwrap();
        assert_eq!(status.status, "ok");
        assert!(chrono::DateTime::parse_from_rfc3339(&status.time).is_ok());
    }

    #[test]
    fn test_env_filter_uses_configured_level() {
        let logging = LoggingConfig {
            level: "debug".to_string(),
            structured: false,
        };
        // RUST_LOG may be set by the test runner
        if std::env::var("RUST_LOG").is_err() {
            let filter = env_filter(&logging, "term_planner");
            assert!(filter.to_string().contains("debug"));
        }
    }
}

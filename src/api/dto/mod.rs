//! DTO 模块
//!
//! HTTP 服务的请求与响应体。请求字段均为可选，缺失值会以带消息的 400
//! 响应返回，而不是请求体解析失败。

pub mod schedule_dto;
pub mod term_dto;
pub mod tracker_dto;

pub use schedule_dto::*;
pub use term_dto::*;
pub use tracker_dto::*;

use chrono::{DateTime, NaiveDate};
use serde_json::Value;

/// Positive integer from a JSON number or numeric string
pub fn parse_positive_int(value: &Value) -> Option<u32> {
    let parsed = match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| f.fract() == 0.0 && *f >= 0.0).map(|f| f as u64)),
        Value::String(s) => s.trim().parse::<u64>().ok(),
        _ => None,
    }?;
    u32::try_from(parsed).ok().filter(|n| *n > 0)
}

/// Calendar date from `YYYY-MM-DD` or an RFC 3339 timestamp
pub fn parse_date(value: &str) -> Option<NaiveDate> {
    let value = value.trim();
    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(value)
                .ok()
                .map(|dt| dt.date_naive())
        })
}

/// Trimmed, non-empty string
pub fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}

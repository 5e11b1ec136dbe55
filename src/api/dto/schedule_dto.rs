use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Create schedule entry request
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateScheduleRequest {
    pub name: Option<String>,
    pub instructor: Option<String>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub days: Option<Vec<String>>,
    pub date: Option<String>,
    /// Number or numeric string
    pub week: Option<Value>,
    pub notice: Option<String>,
    pub term_id: Option<String>,
}

/// Notice update request
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct UpdateNoticeRequest {
    pub notice: Option<String>,
}

/// Query string for listing schedule entries
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ListSchedulesParams {
    pub term_id: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdatedResponse {
    pub updated: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DeletedResponse {
    pub deleted: u64,
}

use serde::{Deserialize, Serialize};

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PostNoticeRequest {
    pub message: Option<String>,
}

/// Done flag toggle; a missing flag means "not done"
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct SetDoneRequest {
    pub done: Option<bool>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SuccessResponse {
    pub success: bool,
}

impl SuccessResponse {
    pub fn ok() -> Self {
        Self { success: true }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct RemovedResponse {
    pub removed: u64,
}

use serde::Deserialize;
use serde_json::Value;

/// Create term request
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CreateTermRequest {
    pub name: Option<String>,
    /// Number or numeric string
    pub term_length: Option<Value>,
    pub start_date: Option<String>,
}

/// Update term request; only the length is editable
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct UpdateTermRequest {
    pub term_length: Option<Value>,
}

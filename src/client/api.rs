//! Schedule service client
//!
//! `ScheduleApi` is the seam the controller talks through; `HttpScheduleApi`
//! is the reqwest implementation.

use async_trait::async_trait;
use chrono::NaiveDate;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::debug;

use crate::models::schedule::{NewScheduleEntry, ScheduleEntry};
use crate::models::term::Term;
use crate::planner::error::{PlannerError, Result};

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ScheduleApi: Send + Sync {
    async fn list_terms(&self) -> Result<Vec<Term>>;

    async fn create_term(&self, name: &str, term_length: u32, start_date: NaiveDate) -> Result<Term>;

    async fn update_term_length(&self, id: &str, term_length: u32) -> Result<Term>;

    /// Entries of one term, ordered by week then start time
    async fn list_schedules(&self, term_id: &str) -> Result<Vec<ScheduleEntry>>;

    async fn create_schedule(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry>;

    /// Returns the number of updated entries
    async fn update_notice(&self, id: &str, notice: &str) -> Result<u64>;

    /// Returns the number of deleted entries
    async fn delete_schedule(&self, id: &str) -> Result<u64>;
}

#[async_trait]
impl<A: ScheduleApi + ?Sized> ScheduleApi for std::sync::Arc<A> {
    async fn list_terms(&self) -> Result<Vec<Term>> {
        (**self).list_terms().await
    }

    async fn create_term(&self, name: &str, term_length: u32, start_date: NaiveDate) -> Result<Term> {
        (**self).create_term(name, term_length, start_date).await
    }

    async fn update_term_length(&self, id: &str, term_length: u32) -> Result<Term> {
        (**self).update_term_length(id, term_length).await
    }

    async fn list_schedules(&self, term_id: &str) -> Result<Vec<ScheduleEntry>> {
        (**self).list_schedules(term_id).await
    }

    async fn create_schedule(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        (**self).create_schedule(entry).await
    }

    async fn update_notice(&self, id: &str, notice: &str) -> Result<u64> {
        (**self).update_notice(id, notice).await
    }

    async fn delete_schedule(&self, id: &str) -> Result<u64> {
        (**self).delete_schedule(id).await
    }
}

/// Decode a success body, or turn an error status into `PlannerError::Status`
pub(crate) async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    let status = response.status();
    if status.is_success() {
        return Ok(response.json::<T>().await?);
    }

    let message = response
        .json::<Value>()
        .await
        .ok()
        .and_then(|body| body.get("error").and_then(Value::as_str).map(str::to_string))
        .unwrap_or_else(|| status.canonical_reason().unwrap_or("Unknown error").to_string());
    Err(PlannerError::Status {
        status: status.as_u16(),
        message,
    })
}

/// `{base_url}/api{path}`
pub(crate) fn api_url(base_url: &str, path: &str) -> String {
    format!("{}/api{}", base_url.trim_end_matches('/'), path)
}

#[derive(Debug, Clone)]
pub struct HttpScheduleApi {
    client: Client,
    base_url: String,
}

impl HttpScheduleApi {
    /// `base_url` is the service root, e.g. `http://localhost:3001`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    fn url(&self, path: &str) -> String {
        api_url(&self.base_url, path)
    }
}

#[derive(serde::Deserialize)]
struct Updated {
    updated: u64,
}

#[derive(serde::Deserialize)]
struct Deleted {
    deleted: u64,
}

#[async_trait]
impl ScheduleApi for HttpScheduleApi {
    async fn list_terms(&self) -> Result<Vec<Term>> {
        let response = self.client.get(self.url("/terms")).send().await?;
        read_json(response).await
    }

    async fn create_term(&self, name: &str, term_length: u32, start_date: NaiveDate) -> Result<Term> {
        debug!("POST term {}", name);
        let body = json!({
            "name": name,
            "termLength": term_length,
            "startDate": start_date
        });
        let response = self
            .client
            .post(self.url("/terms"))
            .json(&body)
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_term_length(&self, id: &str, term_length: u32) -> Result<Term> {
        let response = self
            .client
            .put(self.url(&format!("/terms/{}", id)))
            .json(&json!({ "termLength": term_length }))
            .send()
            .await?;
        read_json(response).await
    }

    async fn list_schedules(&self, term_id: &str) -> Result<Vec<ScheduleEntry>> {
        let response = self
            .client
            .get(self.url("/schedules"))
            .query(&[("termId", term_id)])
            .send()
            .await?;
        read_json(response).await
    }

    async fn create_schedule(&self, entry: &NewScheduleEntry) -> Result<ScheduleEntry> {
        let response = self
            .client
            .post(self.url("/schedules"))
            .json(entry)
            .send()
            .await?;
        read_json(response).await
    }

    async fn update_notice(&self, id: &str, notice: &str) -> Result<u64> {
        let response = self
            .client
            .put(self.url(&format!("/schedules/{}", id)))
            .json(&json!({ "notice": notice }))
            .send()
            .await?;
        Ok(read_json::<Updated>(response).await?.updated)
    }

    async fn delete_schedule(&self, id: &str) -> Result<u64> {
        let response = self
            .client
            .delete(self.url(&format!("/schedules/{}", id)))
            .send()
            .await?;
        Ok(read_json::<Deleted>(response).await?.deleted)
    }
}

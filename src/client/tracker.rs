//! Tracker service client
//!
//! Mirrors the assignment and exam pages: every user action is followed by
//! a message on the service's notice feed. Failures to post a notice are
//! logged and otherwise ignored.

use reqwest::Client;
use serde_json::json;
use std::marker::PhantomData;
use tracing::warn;

use super::api::{api_url, read_json};
use crate::models::tracker::TrackedItem;
use crate::planner::error::Result;

#[derive(Debug, serde::Deserialize)]
struct Removed {
    removed: u64,
}

pub struct TrackerClient<T: TrackedItem> {
    client: Client,
    base_url: String,
    _item: PhantomData<fn() -> T>,
}

impl<T: TrackedItem> Clone for TrackerClient<T> {
    fn clone(&self) -> Self {
        Self {
            client: self.client.clone(),
            base_url: self.base_url.clone(),
            _item: PhantomData,
        }
    }
}

impl<T: TrackedItem> TrackerClient<T> {
    /// `base_url` is the service root, e.g. `http://localhost:4002`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(Client::new(), base_url)
    }

    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            _item: PhantomData,
        }
    }

    fn collection_url(&self) -> String {
        api_url(&self.base_url, &format!("/{}", T::COLLECTION))
    }

    fn item_url(&self, id: &str) -> String {
        api_url(&self.base_url, &format!("/{}/{}", T::COLLECTION, id))
    }

    fn notices_url(&self) -> String {
        api_url(&self.base_url, "/notices")
    }

    fn lower_name() -> String {
        T::DISPLAY_NAME.to_lowercase()
    }

    /// Post a line to the notice feed, logging failures
    async fn announce(&self, message: String) {
        if let Err(e) = self.post_notice(&message).await {
            warn!("Failed to post notice \"{}\": {}", message, e);
        }
    }

    async fn send_list(&self) -> Result<Vec<T>> {
        let response = self.client.get(self.collection_url()).send().await?;
        read_json(response).await
    }

    async fn send_add(&self, draft: &T::Draft) -> Result<T> {
        let response = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await?;
        read_json(response).await
    }

    async fn send_delete(&self, id: &str) -> Result<()> {
        let response = self.client.delete(self.item_url(id)).send().await?;
        read_json::<serde_json::Value>(response).await.map(|_| ())
    }

    async fn send_set_done(&self, id: &str, done: bool) -> Result<T> {
        let response = self
            .client
            .patch(self.item_url(id))
            .json(&json!({ "done": done }))
            .send()
            .await?;
        read_json(response).await
    }

    async fn send_remove_done(&self) -> Result<u64> {
        let response = self.client.delete(self.collection_url()).send().await?;
        Ok(read_json::<Removed>(response).await?.removed)
    }

    /// Items in display order
    pub async fn list(&self) -> Result<Vec<T>> {
        let result = self.send_list().await;
        if let Err(e) = &result {
            warn!("Failed to load {}: {}", T::COLLECTION, e);
            self.announce(format!("Failed to load {} from server.", T::COLLECTION))
                .await;
        }
        result
    }

    pub async fn add(&self, draft: &T::Draft) -> Result<T> {
        let result = self.send_add(draft).await;

        match &result {
            Ok(item) => {
                self.announce(format!("{} \"{}\" added!", T::DISPLAY_NAME, item.title()))
                    .await
            }
            Err(_) => self.announce(format!("Failed to add {}.", Self::lower_name())).await,
        }
        result
    }

    /// Delete an item; `title` is only used for the notice
    pub async fn delete(&self, id: &str, title: &str) -> Result<()> {
        let result = self.send_delete(id).await;

        match &result {
            Ok(()) => {
                self.announce(format!("{} \"{}\" deleted.", T::DISPLAY_NAME, title))
                    .await
            }
            Err(_) => {
                self.announce(format!("Failed to delete {}.", Self::lower_name()))
                    .await
            }
        }
        result
    }

    pub async fn set_done(&self, id: &str, done: bool) -> Result<T> {
        let result = self.send_set_done(id, done).await;

        match &result {
            Ok(item) => {
                let state = if item.is_done() { "done" } else { "not done" };
                self.announce(format!(
                    "{} \"{}\" marked as {}.",
                    T::DISPLAY_NAME,
                    item.title(),
                    state
                ))
                .await
            }
            Err(_) => {
                self.announce(format!("Failed to update {}.", Self::lower_name()))
                    .await
            }
        }
        result
    }

    /// Remove every done item; `items` is the list currently shown
    ///
    /// Nothing is sent when no shown item is done.
    pub async fn remove_done(&self, items: &[T]) -> Result<u64> {
        if !items.iter().any(TrackedItem::is_done) {
            self.announce(format!("No {} selected for removal.", T::COLLECTION))
                .await;
            return Ok(0);
        }

        let result = self.send_remove_done().await;

        match &result {
            Ok(_) => {
                self.announce(format!("Removed all done {}.", T::COLLECTION))
                    .await
            }
            Err(_) => {
                self.announce(format!("Failed to remove done {}.", T::COLLECTION))
                    .await
            }
        }
        result
    }

    pub async fn notices(&self) -> Result<Vec<String>> {
        let response = self.client.get(self.notices_url()).send().await?;
        read_json(response).await
    }

    pub async fn post_notice(&self, message: &str) -> Result<()> {
        let response = self
            .client
            .post(self.notices_url())
            .json(&json!({ "message": message }))
            .send()
            .await?;
        read_json::<serde_json::Value>(response).await.map(|_| ())
    }

    pub async fn clear_notices(&self) -> Result<()> {
        let response = self.client.delete(self.notices_url()).send().await?;
        read_json::<serde_json::Value>(response).await.map(|_| ())
    }
}

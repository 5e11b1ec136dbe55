//! 追踪服务
//!
//! 作业与考试追踪共用同一个泛型服务。

use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::error::{AppError, Result};
use crate::models::tracker::TrackedItem;
use crate::storage::repository::Repository;

pub struct TrackerService<T: TrackedItem> {
    repository: Arc<dyn Repository<T>>,
}

impl<T: TrackedItem> Clone for TrackerService<T> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

impl<T: TrackedItem> TrackerService<T> {
    pub fn new(repository: Arc<dyn Repository<T>>) -> Self {
        Self { repository }
    }

    fn not_found() -> AppError {
        AppError::NotFound("Not found".to_string())
    }

    /// All items in display order
    pub async fn list(&self) -> Result<Vec<T>> {
        let mut items = self.repository.list().await?;
        items.sort_by(|a, b| a.display_order(b));
        Ok(items)
    }

    pub async fn add(&self, draft: T::Draft) -> Result<T> {
        let item = T::from_draft(draft)?;
        let created = self.repository.create(item.id(), &item).await?;
        info!("Added {} {}", T::DISPLAY_NAME, created.id());
        Ok(created)
    }

    pub async fn delete(&self, id: &str) -> Result<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(Self::not_found())
        }
    }

    /// Set the done flag, returning the updated item
    pub async fn set_done(&self, id: &str, done: bool) -> Result<T> {
        self.repository
            .merge(id, json!({ "done": done }))
            .await?
            .ok_or_else(Self::not_found)
    }

    /// Delete every done item, returning how many were removed
    pub async fn remove_done(&self) -> Result<u64> {
        let removed = self.repository.delete_where("done", json!(true)).await?;
        info!("Removed {} done {} items", removed, T::COLLECTION);
        Ok(removed)
    }
}

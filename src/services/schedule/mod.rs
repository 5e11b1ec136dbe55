//! 课表服务
//!
//! 保存展开后的课表条目。重复条目在提交前由规划器过滤，存储本身不去重。

use async_trait::async_trait;
use serde_json::json;
use std::sync::Arc;

use crate::error::Result;
use crate::models::schedule::{NewScheduleEntry, ScheduleEntry};
use crate::storage::repository::Repository;

/// 课表服务 trait
#[async_trait]
pub trait ScheduleService: Send + Sync {
    /// Entries ordered by week then start time, optionally for one term
    async fn list(&self, term_id: Option<&str>) -> Result<Vec<ScheduleEntry>>;

    /// Store one entry
    async fn create(&self, entry: NewScheduleEntry) -> Result<ScheduleEntry>;

    /// Replace the notice text, returning the number of updated entries
    async fn update_notice(&self, id: &str, notice: &str) -> Result<u64>;

    /// Remove an entry, returning the number of deleted entries
    async fn delete(&self, id: &str) -> Result<u64>;
}

/// 课表服务实现
pub struct ScheduleServiceImpl {
    repository: Arc<dyn Repository<ScheduleEntry>>,
}

impl ScheduleServiceImpl {
    pub fn new(repository: Arc<dyn Repository<ScheduleEntry>>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ScheduleService for ScheduleServiceImpl {
    async fn list(&self, term_id: Option<&str>) -> Result<Vec<ScheduleEntry>> {
        let mut entries = match term_id {
            Some(term_id) => {
                self.repository
                    .list_where("termId", json!(term_id))
                    .await?
            }
            None => self.repository.list().await?,
        };
        entries.sort_by(|a, b| {
            a.week
                .cmp(&b.week)
                .then_with(|| a.start_time.cmp(&b.start_time))
        });
        Ok(entries)
    }

    async fn create(&self, entry: NewScheduleEntry) -> Result<ScheduleEntry> {
        let entry = entry.into_entry();
        self.repository.create(&entry.id, &entry).await
    }

    async fn update_notice(&self, id: &str, notice: &str) -> Result<u64> {
        let updated = self
            .repository
            .merge(id, json!({ "notice": notice }))
            .await?;
        Ok(updated.map_or(0, |_| 1))
    }

    async fn delete(&self, id: &str) -> Result<u64> {
        Ok(u64::from(self.repository.delete(id).await?))
    }
}

/// 创建课表服务
pub fn create_schedule_service(
    repository: Arc<dyn Repository<ScheduleEntry>>,
) -> Box<dyn ScheduleService> {
    Box::new(ScheduleServiceImpl::new(repository))
}

use crate::models::notice::NoticeLog;
use crate::models::schedule::ScheduleEntry;
use crate::models::term::Term;
use crate::models::tracker::TrackedItem;
use crate::services::schedule::{ScheduleService, create_schedule_service};
use crate::services::term::{TermService, create_term_service};
use crate::services::tracker::TrackerService;
use crate::storage::repository::DocumentRepository;
use crate::storage::surrealdb::SurrealPool;
use std::sync::Arc;

/// Table holding terms
pub const TERMS_TABLE: &str = "terms";
/// Table holding schedule entries
pub const SCHEDULES_TABLE: &str = "schedules";

/// 课表/学期服务处理器共享的状态
#[derive(Clone)]
pub struct ScheduleState {
    /// 学期服务，负责学期业务逻辑
    pub term_service: Arc<dyn TermService>,
    /// 课表服务，负责课表条目存储
    pub schedule_service: Arc<dyn ScheduleService>,
}

impl std::fmt::Debug for ScheduleState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScheduleState")
            .field("term_service", &"Arc<dyn TermService>")
            .field("schedule_service", &"Arc<dyn ScheduleService>")
            .finish()
    }
}

impl ScheduleState {
    pub fn new(
        term_service: Box<dyn TermService>,
        schedule_service: Box<dyn ScheduleService>,
    ) -> Self {
        Self {
            term_service: Arc::from(term_service),
            schedule_service: Arc::from(schedule_service),
        }
    }

    /// Build the services on top of an open database
    pub fn from_pool(pool: &SurrealPool) -> Self {
        let terms = DocumentRepository::<Term>::new(pool.inner(), TERMS_TABLE);
        let schedules = DocumentRepository::<ScheduleEntry>::new(pool.inner(), SCHEDULES_TABLE);
        Self::new(
            create_term_service(Arc::new(terms)),
            create_schedule_service(Arc::new(schedules)),
        )
    }
}

/// 单个追踪服务处理器共享的状态
pub struct TrackerState<T: TrackedItem> {
    pub service: TrackerService<T>,
    /// 内存通知流，重启后丢失
    pub notices: Arc<NoticeLog>,
}

impl<T: TrackedItem> Clone for TrackerState<T> {
    fn clone(&self) -> Self {
        Self {
            service: self.service.clone(),
            notices: Arc::clone(&self.notices),
        }
    }
}

impl<T: TrackedItem> std::fmt::Debug for TrackerState<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrackerState")
            .field("collection", &T::COLLECTION)
            .field("notices", &self.notices.list().len())
            .finish()
    }
}

impl<T: TrackedItem> TrackerState<T> {
    pub fn new(service: TrackerService<T>) -> Self {
        Self {
            service,
            notices: Arc::new(NoticeLog::new()),
        }
    }

    /// Build the tracker on top of an open database, one table per item kind
    pub fn from_pool(pool: &SurrealPool) -> Self {
        let repository = DocumentRepository::<T>::new(pool.inner(), T::COLLECTION);
        Self::new(TrackerService::new(Arc::new(repository)))
    }
}

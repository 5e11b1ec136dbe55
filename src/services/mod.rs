//! 服务层
//!
//! 位于 HTTP 处理器与文档存储之间的业务规则。

pub mod schedule;
pub mod term;
pub mod tracker;

pub use schedule::{ScheduleService, create_schedule_service};
pub use term::{TermService, create_term_service};
pub use tracker::TrackerService;

//! 课表规划核心
//!
//! 日历计算、课程展开、周视图以及客户端驱动的页面状态。本模块不涉及网络。

pub mod dates;
pub mod debounce;
pub mod error;
pub mod expansion;
pub mod navigation;
pub mod retry;
pub mod state;
pub mod view;

pub use dates::{date_for_weekday, parse_weekday, weekday_name};
pub use debounce::Debouncer;
pub use error::PlannerError;
pub use expansion::{CourseDraft, WeekSelection, expand_course};
pub use retry::{VisibilityPolicy, wait_for_visibility};
pub use state::PlannerState;
pub use view::{CoursesByWeek, WeekView, group_by_week, ordered_entries};

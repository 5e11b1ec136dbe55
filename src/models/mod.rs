//! 数据模型
//!
//! 学期与课表条目、作业与考试追踪条目，以及内存中的通知流。

pub mod notice;
pub mod schedule;
pub mod term;
pub mod tracker;

pub use notice::NoticeLog;
pub use schedule::{NewScheduleEntry, ScheduleEntry};
pub use term::Term;
pub use tracker::{Assignment, AssignmentDraft, Exam, ExamDraft, TrackedItem};

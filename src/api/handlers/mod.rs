//! 处理器模块
//!
//! HTTP 请求处理器。

pub mod notice_handler;
pub mod schedule_handler;
pub mod term_handler;
pub mod tracker_handler;

pub use notice_handler::*;
pub use schedule_handler::*;
pub use term_handler::*;
pub use tracker_handler::*;

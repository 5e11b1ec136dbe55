//! 规划器客户端
//!
//! 三个服务的 HTTP 客户端，以及驱动课表页面的控制器。

pub mod api;
pub mod banner;
pub mod controller;
pub mod tracker;

pub use api::{HttpScheduleApi, ScheduleApi};
pub use banner::{Banner, BannerKind, Banners};
pub use controller::ScheduleController;
pub use tracker::TrackerClient;

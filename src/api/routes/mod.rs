//! 路由模块
//!
//! 三个服务的路由表。

pub mod schedule_routes;
pub mod term_routes;
pub mod tracker_routes;

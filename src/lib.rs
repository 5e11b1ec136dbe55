//! 学期课程规划器
//!
//! 按学期规划每周课表，并附带作业与考试追踪。服务端提供三个基于
//! SurrealDB 的 HTTP 服务；客户端包含规划状态机以及驱动它的 HTTP 客户端。

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod observability;
pub mod planner;
pub mod services;
pub mod storage;

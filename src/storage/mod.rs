//! 存储层
//!
//! 基于 SurrealDB 的文档持久化，默认嵌入式落盘。

pub mod repository;
pub mod surrealdb;

pub use repository::{DocumentRepository, Repository};
pub use surrealdb::SurrealPool;

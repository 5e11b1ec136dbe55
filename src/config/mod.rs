//! 配置模块
//!
//! 加载顺序：内置默认值、TOML 文件、环境变量覆盖。

pub mod config;
pub mod loader;

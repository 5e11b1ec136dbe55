use crate::config::config::AppConfig;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use std::path::{Path, PathBuf};

/// 配置加载器
pub struct ConfigLoader;

impl ConfigLoader {
    /// 从默认位置加载配置
    ///
    /// 配置来源，后者覆盖前者：
    /// 1. 内置开发环境默认值
    /// 2. ./planner.toml
    /// 3. `PLANNER_` 环境变量（`__` 分隔层级）
    pub fn load() -> Result<AppConfig, figment::Error> {
        Self::load_from(default_config_path())
    }

    /// 从指定文件加载配置
    pub fn load_from(path: impl AsRef<Path>) -> Result<AppConfig, figment::Error> {
        Figment::from(Serialized::defaults(AppConfig::development()))
            .merge(Toml::file(path.as_ref()))
            .merge(Env::prefixed("PLANNER_").split("__"))
            .extract()
    }

    /// 验证配置
    pub fn validate(config: &AppConfig) -> Result<(), ConfigValidationError> {
        let ports = [
            config.server.schedule_port,
            config.server.assignment_port,
            config.server.exam_port,
        ];
        if ports.contains(&0) {
            return Err(ConfigValidationError::InvalidPort);
        }
        if ports[0] == ports[1] || ports[0] == ports[2] || ports[1] == ports[2] {
            return Err(ConfigValidationError::DuplicatePort);
        }

        if config.database.url.is_empty() {
            return Err(ConfigValidationError::MissingDatabaseUrl);
        }

        if config.planner.visibility_attempts == 0 {
            return Err(ConfigValidationError::InvalidVisibilityAttempts);
        }

        Ok(())
    }
}

/// 配置验证错误
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigValidationError {
    #[error("Server ports must be greater than 0")]
    InvalidPort,

    #[error("Each service needs its own port")]
    DuplicatePort,

    #[error("Database URL is not configured")]
    MissingDatabaseUrl,

    #[error("planner.visibility_attempts must be at least 1")]
    InvalidVisibilityAttempts,
}

/// 默认配置文件路径
pub fn default_config_path() -> PathBuf {
    PathBuf::from("planner.toml")
}

use serde::{Deserialize, Serialize};

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SurrealDB endpoint (`rocksdb://path`, `mem://`, `ws://host:port`, ...)
    pub url: String,
    /// 命名空间
    pub namespace: String,
    /// 数据库名称
    pub database: String,
    /// Root username, only used for remote endpoints
    pub username: String,
    /// Root password, only used for remote endpoints
    pub password: String,
}

impl DatabaseConfig {
    /// In-memory database, used by tests
    pub fn in_memory(database: &str) -> Self {
        Self {
            url: "mem://".into(),
            namespace: "planner".into(),
            database: database.into(),
            username: String::new(),
            password: String::new(),
        }
    }

    /// Whether the endpoint is a remote server rather than an embedded engine
    pub fn is_remote(&self) -> bool {
        ["ws://", "wss://", "http://", "https://"]
            .iter()
            .any(|scheme| self.url.starts_with(scheme))
    }
}

/// 服务器配置
///
/// 每个服务监听独立端口。
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// 绑定地址
    pub host: String,
    /// Schedule and term service port
    pub schedule_port: u16,
    /// Assignment tracker port
    pub assignment_port: u16,
    /// Exam tracker port
    pub exam_port: u16,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    /// Default filter when `RUST_LOG` is not set
    pub level: String,
    /// Emit JSON lines instead of human readable output
    pub structured: bool,
}

/// Client-side planner behaviour
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PlannerConfig {
    /// How many times a newly created term is polled for
    pub visibility_attempts: u32,
    /// Pause before each poll (milliseconds)
    pub visibility_interval_ms: u64,
    /// Quiet period before a notice edit is saved (milliseconds)
    pub notice_debounce_ms: u64,
}

impl PlannerConfig {
    pub fn notice_debounce(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.notice_debounce_ms)
    }
}

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub planner: PlannerConfig,
    /// Application name, also the default tracing target
    pub app_name: String,
    /// 运行环境
    pub environment: String,
}

impl AppConfig {
    /// 开发环境配置
    pub fn development() -> Self {
        Self {
            database: DatabaseConfig {
                url: "rocksdb://./data/planner.db".into(),
                namespace: "planner".into(),
                database: "planner".into(),
                username: "root".into(),
                password: "root".into(),
            },
            server: ServerConfig {
                host: "127.0.0.1".into(),
                schedule_port: 3001,
                assignment_port: 4002,
                exam_port: 4003,
            },
            logging: LoggingConfig {
                level: "debug".into(),
                structured: false,
            },
            planner: PlannerConfig {
                visibility_attempts: 10,
                visibility_interval_ms: 200,
                notice_debounce_ms: 1000,
            },
            app_name: "term_planner".into(),
            environment: "development".into(),
        }
    }

    /// 生产环境配置
    pub fn production() -> Self {
        let mut config = Self::development();
        config.environment = "production".into();
        config.logging.level = "info".into();
        config.logging.structured = true;
        config
    }
}

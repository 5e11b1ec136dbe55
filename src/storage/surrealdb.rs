use crate::config::config::DatabaseConfig;
use surrealdb::{
    Surreal,
    engine::any::{Any, connect},
    opt::auth::Root,
};
use tracing::{info, warn};

/// SurrealDB 连接池
///
/// 嵌入式引擎（`rocksdb://`、`mem://`）与远程服务器都通过 `any` 引擎打开，
/// 克隆共享同一连接。
#[derive(Clone)]
pub struct SurrealPool {
    db: Surreal<Any>,
}

impl SurrealPool {
    /// 按 `config` 打开数据库
    pub async fn new(config: DatabaseConfig) -> Result<Self, surrealdb::Error> {
        if let Some(path) = config.url.strip_prefix("rocksdb://") {
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    // rocksdb only creates the leaf directory
                    if let Err(e) = tokio::fs::create_dir_all(parent).await {
                        warn!("Could not create {}: {}", parent.display(), e);
                    }
                }
            }
        }

        let db: Surreal<Any> = connect(&config.url).await?;

        if config.is_remote() {
            db.signin(Root {
                username: &config.username,
                password: &config.password,
            })
            .await?;
        }

        db.use_ns(&config.namespace)
            .use_db(&config.database)
            .await?;

        info!(
            "Connected to {} (ns={}, db={})",
            config.url, config.namespace, config.database
        );

        Ok(Self { db })
    }

    /// 数据库句柄
    pub fn inner(&self) -> Surreal<Any> {
        self.db.clone()
    }
}

use sqlx::SqlitePool;

use crate::core::{Config, Result};
use crate::db::DbService;

/// 服务器状态 - 请求处理器共享的唯一上下文
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | db | DbService | 共享 SQLite 句柄 |
///
/// Clone 为浅拷贝：所有克隆共享同一个连接池。
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: DbService,
}

impl ServerState {
    pub fn new(config: Config, db: DbService) -> Self {
        Self { config, db }
    }

    /// 打开数据库并构建状态
    ///
    /// 数据库文件及其父目录不存在时自动创建，迁移随后执行。
    pub async fn initialize(config: &Config) -> Result<Self> {
        tracing::info!(
            path = %config.database_path.display(),
            max_connections = config.db_max_connections,
            "Opening database"
        );
        let db = DbService::open(&config.database_path, config.db_max_connections).await?;
        Ok(Self::new(config.clone(), db))
    }

    /// 共享数据库句柄
    pub fn pool(&self) -> &SqlitePool {
        self.db.pool()
    }
}

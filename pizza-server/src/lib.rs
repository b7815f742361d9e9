//! Pizza Palace API - 披萨店点餐后端
//!
//! # 架构概述
//!
//! - **数据库** (`db`): 嵌入式 SQLite (sqlx)，启动时打开、关闭时释放
//! - **认证** (`auth`): Argon2 密码 + `auth-token` 会话 Cookie
//! - **支付** (`services/paytr`): PayTR iFrame 令牌
//! - **HTTP API** (`api`): JSON 路由，统一 `ApiResponse` 信封
//!
//! # 模块结构
//!
//! ```text
//! pizza-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── auth/          # 密码、Cookie、会话提取器
//! ├── services/      # PayTR
//! ├── api/           # HTTP 路由和处理器
//! ├── utils/         # 日志
//! └── db/            # 数据库层 (连接 + repository)
//! ```

pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod services;
pub mod utils;

// Re-export 公共类型
pub use api::build_app;
pub use auth::SessionUser;
pub use core::{Config, Server, ServerState};
pub use db::DbService;
pub use shared::{ApiResponse, AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{cleanup_old_logs, init_logger_with_file};

// Security logging macro - 写入 security 日志文件
#[macro_export]
macro_rules! security_log {
    ($level:expr, $event:expr, $($key:ident = $value:expr),*) => {
        tracing::info!(
            target: "security",
            level = $level,
            event = $event,
            $($key = %$value),*
        );
    };
}

/// 按配置初始化日志 (控制台 + 可选文件)
pub fn setup_environment(config: &Config) -> anyhow::Result<()> {
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )
}

pub fn print_banner() {
    println!(
        r#"
    ____  _                     ____        __
   / __ \(_)_______  ____ _   / __ \____ _/ /___ _________
  / /_/ / /_  /_  / / __ `/  / /_/ / __ `/ / __ `/ ___/ _ \
 / ____/ / / /_/ /_/ /_/ /  / ____/ /_/ / / /_/ / /__/  __/
/_/   /_/ /___/___/\__,_/  /_/    \__,_/_/\__,_/\___/\___/
    "#
    );
}

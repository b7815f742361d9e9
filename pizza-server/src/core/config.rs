use std::path::PathBuf;

/// 生产环境默认对外地址
pub const PRODUCTION_BASE_URL: &str = "https://pizzapalace.com.tr";
/// 开发环境默认对外地址
pub const DEVELOPMENT_BASE_URL: &str = "http://localhost:3000";

/// PayTR 商户配置
///
/// 三项凭据都存在时才视为已配置
#[derive(Debug, Clone, Default)]
pub struct PaytrConfig {
    pub merchant_id: Option<String>,
    pub merchant_key: Option<String>,
    pub merchant_salt: Option<String>,
    /// 测试模式 (非生产环境默认开启)
    pub test_mode: bool,
}

impl PaytrConfig {
    /// 返回 (merchant_id, merchant_key, merchant_salt)，任一缺失时返回 None
    pub fn credentials(&self) -> Option<(&str, &str, &str)> {
        match (&self.merchant_id, &self.merchant_key, &self.merchant_salt) {
            (Some(id), Some(key), Some(salt)) => Some((id, key, salt)),
            _ => None,
        }
    }

    pub fn is_configured(&self) -> bool {
        self.credentials().is_some()
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | ENVIRONMENT / NODE_ENV | development | 运行环境 |
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | DATABASE_PATH | data/pizza.db | SQLite 数据库文件 |
/// | DB_MAX_CONNECTIONS | 1 | 连接池大小 |
/// | PUBLIC_BASE_URL | 按环境 | 对外访问地址 |
/// | LOG_LEVEL | info | 日志级别 |
/// | LOG_DIR | - | 文件日志目录 (不设置则只输出到控制台) |
/// | LOG_JSON | 生产环境 true | JSON 格式日志 |
/// | REQUEST_TIMEOUT_MS | 30000 | 请求超时(毫秒) |
/// | PAYTR_MERCHANT_ID / KEY / SALT | - | PayTR 商户凭据 |
/// | PAYTR_TEST_MODE | 非生产环境 true | PayTR 测试模式 |
///
/// # 示例
///
/// ```ignore
/// DATABASE_PATH=/data/pizza.db HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// 运行环境: development | production
    pub environment: String,
    /// HTTP API 服务端口
    pub http_port: u16,
    /// SQLite 数据库文件路径
    pub database_path: PathBuf,
    /// 连接池上限 (默认 1，即单一共享连接)
    pub db_max_connections: u32,
    /// 对外访问地址
    pub public_base_url: String,
    /// 日志级别
    pub log_level: String,
    /// 文件日志目录
    pub log_dir: Option<String>,
    /// 是否使用 JSON 日志格式
    pub log_json: bool,
    /// 请求超时时间 (毫秒)
    pub request_timeout_ms: u64,
    /// PayTR 配置
    pub paytr: PaytrConfig,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置，使用默认值
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置 (测试时传入固定表)
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let environment = lookup("ENVIRONMENT")
            .or_else(|| lookup("NODE_ENV"))
            .unwrap_or_else(|| "development".into());
        let is_production = environment == "production";

        let parse_bool = |name: &str, default: bool| {
            lookup(name)
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        Self {
            http_port: lookup("HTTP_PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            database_path: lookup("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("data/pizza.db")),
            db_max_connections: lookup("DB_MAX_CONNECTIONS")
                .and_then(|p| p.parse().ok())
                .filter(|n| *n > 0)
                .unwrap_or(1),
            public_base_url: lookup("PUBLIC_BASE_URL").unwrap_or_else(|| {
                if is_production {
                    PRODUCTION_BASE_URL.into()
                } else {
                    DEVELOPMENT_BASE_URL.into()
                }
            }),
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".into()),
            log_dir: lookup("LOG_DIR").filter(|s| !s.is_empty()),
            log_json: parse_bool("LOG_JSON", is_production),
            request_timeout_ms: lookup("REQUEST_TIMEOUT_MS")
                .and_then(|p| p.parse().ok())
                .unwrap_or(30000),
            paytr: PaytrConfig {
                merchant_id: lookup("PAYTR_MERCHANT_ID").filter(|s| !s.is_empty()),
                merchant_key: lookup("PAYTR_MERCHANT_KEY").filter(|s| !s.is_empty()),
                merchant_salt: lookup("PAYTR_MERCHANT_SALT").filter(|s| !s.is_empty()),
                test_mode: parse_bool("PAYTR_TEST_MODE", !is_production),
            },
            environment,
        }
    }

    /// 使用自定义数据库路径覆盖配置
    ///
    /// 常用于测试场景
    pub fn with_database(database_path: impl Into<PathBuf>) -> Self {
        let mut config = Self::from_lookup(|_| None);
        config.database_path = database_path.into();
        config
    }

    /// 是否生产环境
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    /// 是否开发环境
    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }

    /// Cookie 是否需要 Secure 标志 (仅生产环境)
    pub fn secure_cookies(&self) -> bool {
        self.is_production()
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

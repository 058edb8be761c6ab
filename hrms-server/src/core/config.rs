use std::str::FromStr;

use crate::core::ServerError;

/// 文档存储后端
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// MongoDB (默认)
    MongoDb,
    /// 进程内存储，重启即丢失
    Memory,
}

impl FromStr for StoreBackend {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mongodb" | "mongo" => Ok(Self::MongoDb),
            "memory" => Ok(Self::Memory),
            other => Err(ServerError::Config(format!(
                "unknown STORE_BACKEND '{}', expected 'mongodb' or 'memory'",
                other
            ))),
        }
    }
}

/// 服务器配置
///
/// # 环境变量
///
/// 所有配置项都可以通过环境变量覆盖：
///
/// | 环境变量 | 默认值 | 说明 |
/// |----------|--------|------|
/// | HTTP_PORT | 3000 | HTTP 服务端口 |
/// | MONGODB_URI | mongodb://localhost:27017 | 文档数据库连接串 |
/// | DATABASE_NAME | hrms | 数据库名 |
/// | EMPLOYEE_COLLECTION | employee | 集合名 |
/// | STORE_BACKEND | mongodb | 存储后端 (mongodb / memory) |
/// | DB_CONNECT_TIMEOUT_MS | 30000 | 初始连接超时(毫秒) |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | 关闭超时(毫秒) |
/// | LOG_LEVEL | info | 默认日志级别 (RUST_LOG 优先) |
/// | LOG_DIR | - | 日志目录，存在时写入滚动文件 |
///
/// # 示例
///
/// ```ignore
/// MONGODB_URI=mongodb://db:27017 HTTP_PORT=8080 cargo run -p hrms-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP API 服务端口
    pub http_port: u16,
    /// 文档数据库连接串
    pub mongodb_uri: String,
    /// 数据库名
    pub database_name: String,
    /// employee 集合名
    pub collection: String,
    /// 存储后端
    pub store_backend: StoreBackend,
    /// 初始连接超时 (毫秒)，不作用于单个请求
    pub connect_timeout_ms: u64,
    /// 关闭超时时间 (毫秒)
    pub shutdown_timeout_ms: u64,
    /// 默认日志级别
    pub log_level: String,
    /// 日志目录
    pub log_dir: Option<String>,
}

impl Config {
    /// 从环境变量加载配置
    ///
    /// 如果环境变量未设置或无法解析，使用默认值；
    /// 未知的 STORE_BACKEND 返回错误，启动中止。
    pub fn from_env() -> Result<Self, ServerError> {
        let backend = match std::env::var("STORE_BACKEND") {
            Ok(v) => v.parse()?,
            Err(_) => StoreBackend::MongoDb,
        };
        Ok(Self::build(backend))
    }

    fn build(store_backend: StoreBackend) -> Self {
        Self {
            http_port: env_parse("HTTP_PORT", 3000),
            mongodb_uri: std::env::var("MONGODB_URI")
                .unwrap_or_else(|_| "mongodb://localhost:27017".into()),
            database_name: std::env::var("DATABASE_NAME").unwrap_or_else(|_| "hrms".into()),
            collection: std::env::var("EMPLOYEE_COLLECTION")
                .unwrap_or_else(|_| "employee".into()),
            store_backend,
            connect_timeout_ms: env_parse("DB_CONNECT_TIMEOUT_MS", 30000),
            shutdown_timeout_ms: env_parse("SHUTDOWN_TIMEOUT_MS", 10000),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok(),
        }
    }

    /// 使用内存存储的配置
    ///
    /// 常用于测试场景
    pub fn in_memory(http_port: u16) -> Self {
        let mut config = Self::build(StoreBackend::Memory);
        config.http_port = http_port;
        config
    }
}

fn env_parse<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_backend_parse() {
        assert_eq!("mongodb".parse::<StoreBackend>().unwrap(), StoreBackend::MongoDb);
        assert_eq!("Mongo".parse::<StoreBackend>().unwrap(), StoreBackend::MongoDb);
        assert_eq!(" memory ".parse::<StoreBackend>().unwrap(), StoreBackend::Memory);
        assert!(matches!(
            "postgres".parse::<StoreBackend>(),
            Err(ServerError::Config(_))
        ));
    }

    #[test]
    fn test_env_parse_default_when_unset() {
        assert_eq!(env_parse("HRMS_TEST_UNSET_PORT_KEY", 3000u16), 3000);
    }

    #[test]
    fn test_in_memory_config() {
        let config = Config::in_memory(0);
        assert_eq!(config.store_backend, StoreBackend::Memory);
        assert_eq!(config.http_port, 0);
    }
}

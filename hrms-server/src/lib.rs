//! HRMS Server - 员工档案 CRUD 服务
//!
//! # 架构概述
//!
//! 一个单资源 (employee) 的 HTTP 服务，把 HTTP 请求翻译为文档数据库的查询，
//! 并以 JSON 返回结果。
//!
//! - **数据库** (`db`): 文档存储抽象 (MongoDB / 内存实现) 与记录映射
//! - **HTTP API** (`api`): RESTful 路由和处理器
//! - **核心** (`core`): 配置、状态、服务器生命周期
//!
//! # 模块结构
//!
//! ```text
//! hrms-server/src/
//! ├── core/          # 配置、状态、错误、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 文档存储、映射、仓储
//! └── utils/         # 错误类型、日志
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use core::{Config, Server, ServerError, ServerState, StoreBackend};
pub use db::{DocumentStore, MemoryStore, MongoStore};
pub use utils::{AppError, AppResult};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// 加载 `.env` 并初始化日志
///
/// 返回加载好的配置，供 `main` 继续启动流程
pub fn setup_environment() -> Result<Config, ServerError> {
    dotenv::dotenv().ok();
    let config = Config::from_env()?;
    init_logger_with_file(Some(&config.log_level), config.log_dir.as_deref());
    Ok(config)
}

pub fn print_banner() {
    println!(
        r#"
    __  ______  __  ________
   / / / / __ \/  |/  / ___/
  / /_/ / /_/ / /|_/ /\__ \
 / __  / _, _/ /  / /___/ /
/_/ /_/_/ |_/_/  /_//____/
    "#
    );
}

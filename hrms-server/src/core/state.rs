use std::sync::Arc;

use crate::core::Config;
use crate::db::DocumentStore;
use crate::db::repository::EmployeeRepository;

/// 服务器状态 - 持有所有共享依赖
///
/// 使用 Arc 实现浅拷贝，每个请求处理器拿到的都是同一个存储句柄。
///
/// | 字段 | 类型 | 说明 |
/// |------|------|------|
/// | config | Config | 配置项 (不可变) |
/// | store | Arc<dyn DocumentStore> | employee 集合的存储客户端 |
///
/// 存储句柄在启动时创建一次，之后只读共享，关闭时由 `main` 调用
/// [`DocumentStore::shutdown`]。
#[derive(Clone, Debug)]
pub struct ServerState {
    /// 服务器配置
    pub config: Config,
    /// 文档存储 (连接池化，可并发使用)
    pub store: Arc<dyn DocumentStore>,
}

impl ServerState {
    pub fn new(config: Config, store: Arc<dyn DocumentStore>) -> Self {
        Self { config, store }
    }

    /// employee 仓储
    pub fn employees(&self) -> EmployeeRepository {
        EmployeeRepository::new(self.store.clone())
    }
}

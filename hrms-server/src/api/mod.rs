//! API 路由模块
//!
//! # 结构
//!
//! - [`employees`] - 员工 CRUD 接口
//! - [`extract`] - 请求体提取器
//! - [`middleware`] - 请求日志

pub mod employees;
pub mod extract;
pub mod middleware;

use axum::Router;

use crate::core::ServerState;

// Re-export common types for handlers
pub use crate::utils::{AppError, AppResult};

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new().merge(employees::router())
}

/// Build the full application: routes, state and request logging
pub fn router(state: ServerState) -> Router {
    build_app()
        .with_state(state)
        .layer(axum::middleware::from_fn(middleware::log_request))
}

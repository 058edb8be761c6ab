//! 工具模块 - 错误类型和日志
//!
//! - [`AppError`] - 请求级错误类型
//! - [`logger`] - 日志初始化

pub mod error;
pub mod logger;
pub mod result;

pub use error::{AppError, ErrorResponse};
pub use result::AppResult;

//! Employee API Module
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /employee | GET | 员工列表 |
//! | /employee | POST | 创建员工 |
//! | /employee/{id} | GET | 查询单个员工 |
//! | /employee/{id} | PUT | 全量更新员工 |
//! | /employee/{id} | DELETE | 删除员工 |

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub use handler::DELETED_MESSAGE;

/// Employee router
pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/employee", get(handler::list).post(handler::create))
        .route("/employee/", get(handler::list).post(handler::create))
        .route(
            "/employee/{id}",
            get(handler::get_by_id)
                .put(handler::update)
                .delete(handler::delete),
        )
}

use anyhow::Context;
use hrms_server::{Server, ServerState, db, print_banner, setup_environment};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. 设置环境 (dotenv, 配置, 日志)
    let config = setup_environment().context("invalid configuration")?;

    print_banner();

    tracing::info!("HRMS server starting...");

    // 2. 连接文档存储 (仅此一处使用连接超时)
    let store = db::connect(&config)
        .await
        .context("failed to connect document store")?;

    // 3. 初始化服务器状态
    let state = ServerState::new(config.clone(), store);

    // 4. 启动 HTTP 服务器，退出后关闭存储连接
    let server = Server::with_state(config, state.clone());
    let result = server.run().await;

    state.store.shutdown().await;
    tracing::info!("Document store closed");

    if let Err(e) = result {
        tracing::error!("Server error: {}", e);
        return Err(e.into());
    }

    Ok(())
}

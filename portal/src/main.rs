mod config;
mod error;
mod server;

use config::Config;
use error::Result;
use axum::serve;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[tokio::main]
async fn main() -> Result<()> {
    // 初始化日志
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| format!("Failed to set tracing subscriber: {}", e))?;

    info!("Starting Portal application...");

    // 加载配置
    let config = Config::load()?;
    info!("Configuration loaded successfully");

    // 初始化应用状态
    let app_state = server::init_app_state(&config).await?;
    info!("Application state initialized");

    // 创建路由
    let app = server::create_router(app_state);

    // 启动HTTP服务器
    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .map_err(|e| format!("Invalid address: {}", e))?;

    info!("Server listening on {}", addr);

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| format!("Failed to bind to {}: {}", addr, e))?;

    serve(listener, app.into_make_service())
        .await
        .map_err(|e| format!("Server error: {}", e))?;

    Ok(())
}

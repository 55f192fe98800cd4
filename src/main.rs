use anyhow::Context;
use clap::Parser;
use lynalyze_analyzer::server;
use lynalyze_analyzer::utils::{logger, validation::Validate};
use lynalyze_analyzer::{AppState, ServerConfig};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();

    // 初始化日誌
    if config.json_logs {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_logger(config.verbose);
    }

    tracing::info!("Starting lynalyze-analyzer v{}", env!("CARGO_PKG_VERSION"));
    if config.verbose {
        tracing::debug!("Server config: {:?}", config);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        return Err(e.into());
    }

    let settings = config
        .load_settings()
        .context("failed to load analyzer settings")?;
    tracing::debug!("Analyzer settings: {:?}", settings);

    let state = AppState::from_settings(settings).context("failed to initialize analyzers")?;

    let (host, port) = config.bind_target();
    let listener = TcpListener::bind((host, port))
        .await
        .with_context(|| format!("failed to bind {}:{}", host, port))?;

    tracing::info!("🚀 Analysis microservice running on http://{}", listener.local_addr()?);
    server::serve(listener, state).await?;
    tracing::info!("Server stopped");

    Ok(())
}

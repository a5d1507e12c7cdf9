//! 主应用程序入口
//!
//! 加载配置，装配仓储与用例，启动 Axum Web API 服务。

use std::sync::Arc;

use application::UseCases;
use config::{AppConfig, StorageBackend};
use infrastructure::{Infrastructure, InfrastructureConfig, TokenConfig, UuidIdGenerator};
use tracing_subscriber::EnvFilter;
use web_api::{router, AppState};

fn infrastructure_config(cfg: &AppConfig) -> InfrastructureConfig {
    InfrastructureConfig {
        database_url: cfg.database.url.clone(),
        max_connections: cfg.database.max_connections,
        acquire_timeout: cfg.acquire_timeout(),
        bcrypt_cost: Some(cfg.security.bcrypt_cost),
        token: TokenConfig {
            access_token_key: cfg.token.access_token_key.clone(),
            refresh_token_key: cfg.token.refresh_token_key.clone(),
            access_token_age_seconds: cfg.token.access_token_age_seconds,
        },
    }
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "failed to listen for shutdown signal");
    }
    tracing::info!("shutdown signal received");
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cfg = AppConfig::load()?;

    // RUST_LOG 优先于配置文件
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&cfg.logging.filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    tracing::info!(config = %cfg.sanitize(), "configuration loaded");

    let infra_config = infrastructure_config(&cfg);
    let infrastructure = match cfg.storage {
        StorageBackend::Postgres => Infrastructure::connect(infra_config).await?,
        StorageBackend::Memory => {
            tracing::warn!("using in-memory storage, data is lost on restart");
            Infrastructure::in_memory(&infra_config, Arc::new(UuidIdGenerator))
        }
    };

    let use_cases = Arc::new(UseCases::new(infrastructure.use_case_dependencies()));
    let state = AppState::new(use_cases, infrastructure.token_manager_trait());
    let app = router(state);

    let addr = cfg.server_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("forum api listening on http://{addr}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

use std::sync::Arc;

use anyhow::Context;

use catalogue_api::app::{AppServices, ErrorExposure, build_app};
use catalogue_infra::{AppConfig, PostgresProductRepository, db};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    catalogue_observability::init();

    if let Err(e) = run().await {
        tracing::error!(error = %format!("{e:#}"), "catalogue-api failed to start");
        return Err(e);
    }
    Ok(())
}

async fn run() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    tracing::info!(config = ?config, "configuration loaded");

    let pool = db::connect(&config)
        .await
        .context("failed to connect to postgres")?;
    let products = PostgresProductRepository::new(pool).with_specs_policy(config.specs_decode);

    let app = build_app(AppServices::new(
        Arc::new(products),
        ErrorExposure::from_flag(config.expose_storage_errors),
    ));

    let addr = config.listen_addr();
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

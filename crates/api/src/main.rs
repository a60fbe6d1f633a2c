use anyhow::Context;

use invoicegen_api::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    invoicegen_observability::init();

    let config = AppConfig::from_env()?;
    let addr = config.bind_addr;

    let app = invoicegen_api::app::build_app(config);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

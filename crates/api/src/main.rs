use anyhow::Context;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dcf_observability::init();

    let addr = std::env::var("DCF_API_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let app = dcf_api::app::build_app();

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    tracing::info!("listening on {}", listener.local_addr()?);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}

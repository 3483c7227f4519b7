use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};
use wellness_journal::{AppState, Config, Journal, Storage, router};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = Config::from_env();
    tokio::fs::create_dir_all(&config.data_dir).await?;

    let journal = Journal::load(Storage::dir(&config.data_dir)).await;
    let app = router(AppState::new(journal));

    let addr = config.listen_addr();
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {err}");
        std::future::pending::<()>().await;
    }
}

use coding_tracker::{resolve_port, router, AppState, TrackerConfig};
use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = TrackerConfig::from_env()?;
    let client = config.build_client()?;
    info!(
        "tracker starts {} and runs {} days; questions from {}{}",
        config.start_date,
        config.max_days,
        config.questions,
        config
            .additional
            .as_ref()
            .map(|source| format!(" and {source}"))
            .unwrap_or_default()
    );

    let app = router(AppState::new(config, client));

    let addr = SocketAddr::from(([0, 0, 0, 0], resolve_port()));
    info!("listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_err() {
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}

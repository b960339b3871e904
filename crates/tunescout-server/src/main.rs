//! Binary entrypoint for the tunescout HTTP server.
//!
//! Configuration is read from environment variables; see
//! [`tunescout_server::config`].

use tunescout_server::config::ServerConfig;
use tunescout_server::router::build_router;
use tunescout_server::state::AppState;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let config = ServerConfig::from_env()?;
    let addr = config.bind_addr();
    tracing::info!(
        musixmatch = %config.musixmatch_base_url,
        itunes = %config.itunes_base_url,
        timeout_secs = config.http_timeout.as_secs(),
        "provider configuration"
    );

    let state = AppState::new(config)?;
    let app = build_router(state);

    tracing::info!("tunescout server starting on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}

use roster_server::{
    app,
    config::{Config, LogLevel},
    AppState,
};

#[tokio::main]
async fn main() {
    let config = Config::from_env();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=debug,tower_http=debug".into()),
        )
        .init();

    tracing::info!(
        "Starting API in {} mode on port {} with log level: {}",
        config.app_env,
        config.port,
        config.log_level.as_str()
    );

    // Startup banner, gated on LOG_LEVEL; debug also prints the info line
    match config.log_level {
        LogLevel::Debug => {
            tracing::debug!("Debugging enabled");
            tracing::info!("Application is starting...");
        }
        LogLevel::Info => tracing::info!("Application is starting..."),
        LogLevel::Warn => tracing::warn!("Warning level set"),
        LogLevel::Error => tracing::error!("Error logging only"),
    }

    let state = AppState::new();
    let addr = config.bind_address();

    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(e) => {
            tracing::error!(%e, addr = %addr, "Failed to bind");
            return;
        }
    };

    tracing::info!("Listening on {}", addr);

    if let Err(e) = axum::serve(listener, app(state)).await {
        tracing::error!(%e, addr = %addr, "Server error");
    }
}

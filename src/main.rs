use condo_dues::{
    api::{self, AppState},
    config::{self, database},
    errors::Result,
};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // 1. Load .env first so RUST_LOG and the overrides below can come from it
    dotenv().ok(); // Non-fatal, env vars can be set externally

    // 2. Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 3. Load settings (config.toml + environment overrides)
    let settings = config::load_settings()
        .inspect_err(|e| error!("Critical error loading settings: {e}"))?;

    // 4. Connect and bootstrap the schema
    let db = database::create_connection(&settings.database.url)
        .await
        .inspect_err(|e| error!("Failed to connect to database: {e}"))?;
    database::create_tables(&db)
        .await
        .inspect(|_| info!("Database initialized successfully."))
        .inspect_err(|e| error!("Failed to initialize database: {e}"))?;

    // 5. Serve the API
    let app = api::router(AppState::new(db));
    let listener = tokio::net::TcpListener::bind(settings.server.bind_address.as_str())
        .await
        .inspect_err(|e| error!("Failed to bind {}: {e}", settings.server.bind_address))?;
    info!("Listening on {}", settings.server.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {e}");
    }
    info!("Shutdown signal received");
}

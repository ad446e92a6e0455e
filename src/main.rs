/**
 * walletd Server Entry Point
 *
 * This is the main entry point for the walletd backend server.
 * It loads configuration, initializes logging, and starts the Axum HTTP server.
 */

use walletd::server::config::AppConfig;
use walletd::server::init::create_app;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "info,walletd=debug".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Fail fast on missing configuration: the signing secret and database
    // URL are required and never defaulted.
    let config = AppConfig::from_env()?;

    let app = create_app(&config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], config.port));
    tracing::info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

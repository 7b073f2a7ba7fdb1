/**
 * PrintShop Server Entry Point
 *
 * Loads configuration, initializes tracing, assembles the Axum app,
 * and serves it. Startup fails fast on missing configuration or an
 * unreachable database.
 */

use printshop::server::{create_app, AppConfig};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load environment variables from .env file if present
    dotenv::dotenv().ok();

    // Initialize tracing
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());

    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .init();

    // Load configuration — a missing DATABASE_URL or JWT_SECRET aborts
    // startup here rather than surfacing per-request later
    let config = AppConfig::from_env()?;
    let port = config.port;

    // Create the Axum app
    let app = create_app(config).await?;

    let addr = std::net::SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Starting server on {}", addr);

    // Run the server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

#![recursion_limit = "256"]

mod config;
mod routes;

use config::ServerConfig;

#[tokio::main]
async fn main() {
    // A missing `.env` is normal in production.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "bookshelf server failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), config::ConfigError> {
    let config = ServerConfig::from_env()?;
    let app = routes::app(&config)?;

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|source| config::ConfigError::Bind { addr: addr.clone(), source })?;

    tracing::info!(%addr, site_root = %config.site_root.display(), "bookshelf listening");
    axum::serve(listener, app).await.map_err(config::ConfigError::Serve)
}

mod config;
mod error;
mod routes;

use error::ServerError;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env()?;
    let app = routes::app().inspect_err(|e| tracing::error!(error = %e, "failed to build router"))?;

    let addr = config.socket_addr();
    let listener = tokio::net::TcpListener::bind(addr).await?;

    tracing::info!(%addr, "tasklist listening");
    axum::serve(listener, app).await?;
    Ok(())
}

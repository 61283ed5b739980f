use std::env;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::EnvFilter;

use newsroom::{client::Sanity, routes, state::AppState};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let client = Sanity::from_env().context("Content client configuration")?;
    tracing::info!(
        "Serving project {} dataset {}",
        client.project_id(),
        client.dataset()
    );

    let studio_url = env::var("STUDIO_URL")
        .unwrap_or_else(|_| format!("https://{}.sanity.studio", client.project_id()));
    let state = AppState::new(Arc::new(client), studio_url);
    let app = routes::create_router(state);

    let port = env::var("PORT").unwrap_or_else(|_| "3000".to_string());
    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0".to_string());
    let addr = format!("{}:{}", bind_addr, port);
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

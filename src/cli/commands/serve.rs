//! HTTP API server command.

use crate::cli::Output;
use crate::config::{ApiKeys, Settings};
use crate::server::{router, AppState};
use std::sync::Arc;

/// Run the HTTP API server.
pub async fn run_serve(
    host: Option<String>,
    port: Option<u16>,
    settings: Settings,
) -> anyhow::Result<()> {
    // Both integrations must have their keys before we bind.
    let keys = ApiKeys::from_env()?;

    let host = host.unwrap_or_else(|| settings.server.host.clone());
    let port = port.unwrap_or(settings.server.port);

    let state = Arc::new(AppState::new(settings, &keys));
    let app = router(state);

    let addr = format!("{}:{}", host, port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    Output::header("Oppsum API Server");
    println!();
    Output::success(&format!("Listening on http://{}", addr));
    println!();
    println!("Endpoints:");
    Output::kv("Health", "GET  /health");
    Output::kv("Search", "GET  /api/youtube/search");
    Output::kv("Captions", "GET  /api/youtube/captions");
    Output::kv("Summarize", "POST /api/ai/summarize");
    println!();
    Output::info("Press Ctrl+C to stop the server.");

    axum::serve(listener, app).await?;

    Ok(())
}

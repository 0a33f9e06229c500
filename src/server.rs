//! Axum router and server setup.
//! Used by: bin/status-server.

use axum::routing::get;
use axum::Router;
use tower_http::cors::CorsLayer;

use crate::handlers;

/// Routes every GET, whatever the path, to the status page, with
/// permissive CORS. Other methods get the method router's default
/// answer (405).
pub fn build_router() -> Router {
    Router::new()
        .fallback_service(get(handlers::status::status_page))
        .layer(CorsLayer::permissive())
}

/// Serves the status page until the process is killed. No graceful
/// shutdown, no timeouts: termination is external.
pub async fn run(addr: &str) -> std::io::Result<()> {
    let router = build_router();
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("listening on {}", addr);
    crate::console::print_server_startup(addr);
    axum::serve(listener, router).await
}

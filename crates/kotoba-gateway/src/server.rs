use std::net::SocketAddr;

use axum::Router;
use axum::routing::get;
use tokio::net::TcpListener;

use crate::jisho::{Upstream, search_handler};

pub const LOOKUP_ROUTE: &str = "/api/jisho";

pub fn router(upstream: Upstream) -> Router {
    Router::new()
        .route(LOOKUP_ROUTE, get(search_handler))
        .with_state(upstream)
}

/// Serve the gateway until the task is cancelled or the listener fails
pub async fn serve(bind_addr: SocketAddr, upstream: Upstream) -> std::io::Result<()> {
    let listener = TcpListener::bind(bind_addr).await?;
    tracing::info!(
        "Gateway listening on http://{}{} (upstream {})",
        listener.local_addr()?,
        LOOKUP_ROUTE,
        upstream.url()
    );
    axum::serve(listener, router(upstream)).await
}

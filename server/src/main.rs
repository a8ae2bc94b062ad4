#![recursion_limit = "256"]

mod config;
mod routes;
mod state;
mod upstream;

use std::sync::Arc;

#[tokio::main]
async fn main() {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt::init();

    let config = config::ServerConfig::from_env().expect("invalid server configuration");
    let upstream = upstream::UpstreamClient::new(&config.upstream_base_url, config.timeouts)
        .expect("upstream client init failed");
    tracing::info!(
        upstream = %upstream.base_url(),
        request_timeout_secs = config.timeouts.request_secs,
        "upstream product API configured"
    );

    let state = state::AppState::new(Arc::new(upstream));

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos options unavailable; serving API routes only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port))
        .await
        .expect("failed to bind");

    tracing::info!(port = config.port, "product-admin listening");
    axum::serve(listener, app).await.expect("server failed");
}

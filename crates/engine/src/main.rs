//! Stockroom Engine - Main entry point.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use axum::http::{HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use stockroom_engine::api;
use stockroom_engine::app::App;
use stockroom_engine::infrastructure::{
    config::AppConfig, firestore::FirestoreCollection, in_memory::InMemoryCollection,
    ports::InventoryCollection,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    load_dotenv();

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "stockroom_engine=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Stockroom Engine");

    let config = AppConfig::from_env()?;

    let collection: Arc<dyn InventoryCollection> = match config.firestore() {
        Some(firestore) => {
            tracing::info!(
                project = %firestore.project_id,
                collection = %firestore.collection,
                base_url = %firestore.base_url,
                "Using Firestore inventory collection"
            );
            Arc::new(FirestoreCollection::new(firestore))
        }
        None => {
            tracing::warn!("Using in-memory inventory collection; data is lost on restart");
            Arc::new(InMemoryCollection::new())
        }
    };

    let app = Arc::new(App::new(collection));

    // Initial load, the page is usable even if the store is down at startup
    if let Err(e) = app.session.lock().await.resync().await {
        tracing::warn!(error = %e, "Initial inventory sync failed");
    }

    let mut router = api::http::routes()
        .with_state(app)
        .layer(TraceLayer::new_for_http());

    if let Some(cors) = build_cors_layer(&config.cors_allowed_origins) {
        router = router.layer(cors);
    }

    // Start server
    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("invalid bind address {}", config.bind_address()))?;
    tracing::info!("Listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

fn load_dotenv() {
    // Prefer local overrides. dotenvy never replaces variables that are already set.
    for filename in [".env.local", ".env"] {
        let _ = dotenvy::from_filename(filename);
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}

fn build_cors_layer(allowed_origins: &[String]) -> Option<CorsLayer> {
    if allowed_origins.is_empty() {
        return None;
    }

    let mut cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([axum::http::header::CONTENT_TYPE]);

    if allowed_origins.iter().any(|o| o == "*") {
        cors = cors.allow_origin(Any);
    } else {
        let origins: Vec<HeaderValue> = allowed_origins
            .iter()
            .filter_map(|s| HeaderValue::from_str(s).ok())
            .collect();

        if origins.is_empty() {
            return None;
        }

        cors = cors.allow_origin(origins);
    }

    Some(cors)
}

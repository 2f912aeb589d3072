//! Storefront HTTP Server
//!
//! Axum-based server providing the catalog API, the checkout endpoint and
//! the compiled WASM front end.

mod config;
mod handlers;
mod routes;
mod state;

use std::sync::Arc;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use store_catalog::{CatalogClient, MemoryCatalog, SanityCatalog};
use store_payments::{CheckoutConfig, StripeClient};

use crate::config::ServerConfig;
use crate::state::{AppState, Checkout};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| "info,tower_http=debug".into()),
        ))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load environment
    dotenvy::dotenv().ok();

    let config = ServerConfig::from_env();

    // Initialize catalog
    let catalog: Arc<dyn CatalogClient> = match SanityCatalog::from_env() {
        Ok(sanity) => {
            tracing::info!(
                project = %sanity.config().project_id,
                dataset = %sanity.config().dataset,
                "✓ Sanity catalog configured"
            );
            Arc::new(sanity)
        }
        Err(e) => {
            tracing::warn!("⚠ {} - serving the built-in demo catalog", e);
            Arc::new(MemoryCatalog::new())
        }
    };

    if !catalog.health_check().await {
        tracing::warn!("⚠ {} catalog not reachable", catalog.name());
    }

    let images = Arc::new(config.image_urls()?);

    // Initialize payments
    let checkout = match (StripeClient::from_env(), CheckoutConfig::from_env()) {
        (Ok(stripe), Ok(checkout_config)) => {
            tracing::info!(
                base_url = %checkout_config.public_base_url,
                shipping_rate = ?checkout_config.shipping_rate,
                "✓ Stripe configured"
            );
            Some(Checkout {
                processor: Arc::new(stripe),
                config: Arc::new(checkout_config),
            })
        }
        (stripe, checkout_config) => {
            tracing::warn!("⚠ Stripe not configured - checkout disabled");
            for e in [stripe.err(), checkout_config.err()].into_iter().flatten() {
                tracing::warn!("  {}", e);
            }
            None
        }
    };

    // Build application state
    let state = AppState {
        catalog,
        images,
        checkout,
    };

    let app = routes::router(state, &config.static_dir);

    // Start server
    let listener = tokio::net::TcpListener::bind(&config.bind_addr).await?;

    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("🛒 storefront running on http://{}", config.bind_addr);
    tracing::info!("══════════════════════════════════════════════════");
    tracing::info!("");
    tracing::info!("Endpoints:");
    tracing::info!("  GET  /health              - Health check");
    tracing::info!("  GET  /api/products        - List products");
    tracing::info!("  GET  /api/products/{{slug}} - Product by slug");
    tracing::info!("  POST /api/checkout        - Create Stripe checkout");
    tracing::info!("");

    axum::serve(listener, app).await?;

    Ok(())
}

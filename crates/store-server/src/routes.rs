//! Router

use std::path::Path;

use axum::{
    Router,
    routing::{get, post},
};
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::handlers::{
    create_checkout, get_product, health_check, list_products, method_not_allowed,
};
use crate::state::AppState;

/// Build the application router
///
/// Unknown paths fall through to the compiled front end in `static_dir`,
/// with `index.html` served for client-side routes.
pub fn router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = Path::new(static_dir).join("index.html");
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        // Health & info
        .route("/health", get(health_check))

        // Catalog
        .route("/api/products", get(list_products))
        .route("/api/products/{slug}", get(get_product))

        // Checkout
        .route(
            "/api/checkout",
            post(create_checkout).fallback(method_not_allowed),
        )

        // Static files (WASM frontend)
        .fallback_service(frontend)

        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(cors),
        )
        .with_state(state)
}

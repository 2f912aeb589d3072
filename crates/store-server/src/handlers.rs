//! HTTP Handlers

use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde::Serialize;

use store_catalog::CatalogError;
use store_core::{CartLineItem, Product};
use store_payments::{CheckoutSessionRequest, PaymentError};

use crate::state::AppState;

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub catalog: String,
    pub catalog_connected: bool,
    pub stripe_configured: bool,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: String,
}

#[derive(Debug, Serialize)]
pub struct CheckoutResponse {
    /// Processor session id
    pub id: String,

    /// Hosted checkout page
    pub url: Option<String>,
}

type ApiError = (StatusCode, Json<ErrorResponse>);

fn api_error(status: StatusCode, error: impl Into<String>, code: &str) -> ApiError {
    (
        status,
        Json(ErrorResponse {
            error: error.into(),
            code: code.into(),
        }),
    )
}

fn payment_error(e: &PaymentError) -> ApiError {
    let status = StatusCode::from_u16(e.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    api_error(status, e.message(), e.code())
}

fn catalog_error(e: &CatalogError) -> ApiError {
    tracing::error!("Catalog error: {}", e);
    api_error(StatusCode::BAD_GATEWAY, e.user_message(), "CATALOG_ERROR")
}

// ============================================================================
// Handlers
// ============================================================================

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> Json<HealthResponse> {
    let catalog_connected = state.catalog.health_check().await;

    Json(HealthResponse {
        status: "healthy",
        version: env!("CARGO_PKG_VERSION"),
        catalog: state.catalog.name().to_string(),
        catalog_connected,
        stripe_configured: state.checkout.is_some(),
    })
}

/// All products
pub async fn list_products(State(state): State<AppState>) -> Result<Json<Vec<Product>>, ApiError> {
    let products = state.catalog.products().await.map_err(|e| catalog_error(&e))?;
    Ok(Json(products))
}

/// One product by slug
pub async fn get_product(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<Product>, ApiError> {
    state
        .catalog
        .product_by_slug(&slug)
        .await
        .map_err(|e| catalog_error(&e))?
        .map(Json)
        .ok_or_else(|| {
            api_error(
                StatusCode::NOT_FOUND,
                format!("No product with slug {slug}"),
                "PRODUCT_NOT_FOUND",
            )
        })
}

/// Create a hosted checkout session from a cart snapshot
///
/// Redirect targets come from configuration; request headers such as
/// `Origin` or `Host` are ignored.
pub async fn create_checkout(
    State(state): State<AppState>,
    payload: Result<Json<Vec<CartLineItem>>, JsonRejection>,
) -> Result<Json<CheckoutResponse>, ApiError> {
    let checkout = state.checkout.as_ref().ok_or_else(|| {
        api_error(
            StatusCode::SERVICE_UNAVAILABLE,
            "Payments not configured",
            "PAYMENTS_DISABLED",
        )
    })?;

    let Json(items) = payload.map_err(|rejection| {
        tracing::warn!(status = %rejection.status(), "Unreadable checkout body: {}", rejection.body_text());
        api_error(StatusCode::BAD_REQUEST, rejection.body_text(), "INVALID_BODY")
    })?;

    let request = CheckoutSessionRequest::from_cart(&items, &state.images, &checkout.config)
        .map_err(|e| {
            tracing::warn!("Rejected checkout: {}", e);
            payment_error(&e)
        })?;

    tracing::info!(
        lines = request.line_items.len(),
        amount_total = request.amount_total(),
        processor = checkout.processor.name(),
        "Creating checkout session"
    );

    let session = checkout
        .processor
        .create_session(&request)
        .await
        .map_err(|e| {
            tracing::error!("Checkout error: {}", e);
            payment_error(&e)
        })?;

    Ok(Json(CheckoutResponse {
        id: session.id,
        url: session.url,
    }))
}

/// Any method other than POST on the checkout endpoint
pub async fn method_not_allowed() -> impl IntoResponse {
    (
        StatusCode::METHOD_NOT_ALLOWED,
        [(header::ALLOW, "POST")],
        "Method Not Allowed",
    )
}

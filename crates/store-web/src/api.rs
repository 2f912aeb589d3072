//! API Client

use serde::Deserialize;
use store_core::{CartLineItem, Product};

/// Checkout session returned by the server
#[derive(Clone, Debug, Deserialize)]
pub struct CheckoutResponse {
    pub id: String,
    pub url: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: String,
}

fn origin() -> String {
    web_sys::window()
        .and_then(|w| w.location().origin().ok())
        .unwrap_or_else(|| "http://localhost:3000".into())
}

fn endpoint(path: &str) -> String {
    format!("{}{path}", origin())
}

async fn error_message(response: reqwest::Response) -> String {
    let status = response.status();
    match response.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => format!("Request failed ({status})"),
    }
}

/// All products in the catalog
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let response = reqwest::get(endpoint("/api/products"))
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_message(response).await)
    }
}

/// One product by slug
pub async fn fetch_product(slug: &str) -> Result<Product, String> {
    let response = reqwest::get(endpoint(&format!("/api/products/{slug}")))
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_message(response).await)
    }
}

/// Create a hosted checkout session for the cart contents
pub async fn create_checkout(items: &[CartLineItem]) -> Result<CheckoutResponse, String> {
    let client = reqwest::Client::new();

    let response = client
        .post(endpoint("/api/checkout"))
        .json(items)
        .send()
        .await
        .map_err(|e| e.to_string())?;

    if response.status().is_success() {
        response.json().await.map_err(|e| e.to_string())
    } else {
        Err(error_message(response).await)
    }
}

/// Send the browser to the hosted checkout page
pub fn redirect(url: &str) -> Result<(), String> {
    web_sys::window()
        .ok_or_else(|| "No window".to_string())?
        .location()
        .set_href(url)
        .map_err(|_| "Redirect failed".to_string())
}

//! HTTP binding for the query service.

use catalog_products::Product;

/// Base URL of the API, fixed at build time.
pub const API_BASE_URL: &str = match option_env!("CATALOG_API_URL") {
    Some(url) => url,
    None => "http://localhost:5000",
};

/// Fetch the whole catalogue.
pub async fn fetch_products() -> Result<Vec<Product>, String> {
    let url = format!("{API_BASE_URL}/api/products");

    let response = reqwest::get(&url)
        .await
        .map_err(|e| format!("request to {url} failed: {e}"))?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(format!("{url} answered {status}: {body}"));
    }

    response
        .json::<Vec<Product>>()
        .await
        .map_err(|e| format!("failed to decode products: {e}"))
}

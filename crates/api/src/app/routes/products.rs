use std::sync::Arc;

use axum::{Extension, Json};

use catalog_products::Product;

use crate::app::errors::ApiError;
use crate::app::services::AppServices;

/// `GET /api/products`: the whole catalogue, unfiltered and unpaginated.
pub async fn list_products(
    Extension(services): Extension<Arc<AppServices>>,
) -> Result<Json<Vec<Product>>, ApiError> {
    let products = services.products_list().await?;
    tracing::debug!(count = products.len(), "listed products");
    Ok(Json(products))
}

use axum::{routing::get, Router};

pub mod products;

/// Router for everything under `/api`.
pub fn router() -> Router {
    Router::new().route("/products", get(products::list_products))
}

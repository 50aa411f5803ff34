use std::sync::Arc;

use axum::{http::StatusCode, routing::get, Extension, Router};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use catalog_infra::ProductStore;

pub mod errors;
pub mod routes;
pub mod services;

pub use services::AppServices;

/// Build the full router over `store`.
///
/// The binary and the black-box tests both go through here.
pub fn build_app(store: Arc<dyn ProductStore>) -> Router {
    let services = Arc::new(AppServices::new(store));

    Router::new()
        .route("/health", get(health))
        .nest("/api", routes::router())
        .layer(Extension(services))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                // The browser view is served from another origin.
                .layer(CorsLayer::permissive()),
        )
}

async fn health() -> StatusCode {
    StatusCode::OK
}

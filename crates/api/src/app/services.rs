use std::sync::Arc;

use catalog_infra::{ProductStore, StoreError};
use catalog_products::Product;

/// Shared handles the route handlers work against.
#[derive(Clone)]
pub struct AppServices {
    store: Arc<dyn ProductStore>,
}

impl AppServices {
    pub fn new(store: Arc<dyn ProductStore>) -> Self {
        Self { store }
    }

    /// Every product in the store's natural order.
    pub async fn products_list(&self) -> Result<Vec<Product>, StoreError> {
        self.store.list().await
    }
}

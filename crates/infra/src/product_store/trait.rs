use async_trait::async_trait;
use thiserror::Error;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product};

#[derive(Debug, Error)]
pub enum StoreError {
    /// The database driver reported a failure (IO, SQL, missing table, ...).
    #[error("{0}")]
    Database(#[from] sqlx::Error),

    #[error("product store lock poisoned")]
    Poisoned,
}

/// Store of product records.
///
/// Identifiers are assigned by the store, strictly increasing in insertion
/// order. `list` returns the store's natural order; callers must not assume
/// any sorting beyond that.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Persist one row and return the identifier it was given.
    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError>;

    /// Every stored product.
    async fn list(&self) -> Result<Vec<Product>, StoreError>;
}

use std::sync::RwLock;

use async_trait::async_trait;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product};

use super::r#trait::{ProductStore, StoreError};

/// In-memory product store.
///
/// Intended for tests/dev. Identifiers start at 1, like SQLite rowids.
#[derive(Debug, Default)]
pub struct InMemoryProductStore {
    products: RwLock<Vec<Product>>,
}

impl InMemoryProductStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populated store (ids assigned in iteration order).
    pub fn with_products(rows: impl IntoIterator<Item = NewProduct>) -> Self {
        let products = rows
            .into_iter()
            .enumerate()
            .map(|(i, row)| row.with_id(ProductId::new(i as i64 + 1)))
            .collect();
        Self {
            products: RwLock::new(products),
        }
    }
}

#[async_trait]
impl ProductStore for InMemoryProductStore {
    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError> {
        let mut products = self.products.write().map_err(|_| StoreError::Poisoned)?;
        let next = products.last().map(|p| p.id.get()).unwrap_or(0) + 1;
        let id = ProductId::new(next);
        products.push(product.clone().with_id(id));
        Ok(id)
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let products = self.products.read().map_err(|_| StoreError::Poisoned)?;
        Ok(products.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn assigns_increasing_ids() {
        let store = InMemoryProductStore::new();
        let a = store.insert(&NewProduct::new("A", "c", "p", "m", "s")).await.unwrap();
        let b = store.insert(&NewProduct::new("B", "c", "p", "m", "s")).await.unwrap();
        assert_eq!(a, ProductId::new(1));
        assert_eq!(b, ProductId::new(2));

        let names: Vec<String> = store.list().await.unwrap().into_iter().map(|p| p.name).collect();
        assert_eq!(names, ["A", "B"]);
    }

    #[tokio::test]
    async fn seeded_store_continues_numbering() {
        let store = InMemoryProductStore::with_products([NewProduct::default(), NewProduct::default()]);
        let id = store.insert(&NewProduct::default()).await.unwrap();
        assert_eq!(id, ProductId::new(3));
        assert_eq!(store.list().await.unwrap().len(), 3);
    }
}

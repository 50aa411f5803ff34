//! SQLite-backed product store.

use std::path::Path;
use std::str::FromStr;

use async_trait::async_trait;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions, SqliteRow};
use sqlx::Row;

use catalog_core::ProductId;
use catalog_products::{NewProduct, Product};

use super::r#trait::{ProductStore, StoreError};

const CREATE_PRODUCTS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS products (
        id             INTEGER PRIMARY KEY,
        name           TEXT,
        category       TEXT,
        processor_type TEXT,
        memory         TEXT,
        storage        TEXT
    )
"#;

/// Product store over a single SQLite database file.
///
/// `SqlitePool` is `Send + Sync` and cheap to clone; the driver serialises
/// access to the file, so no extra locking happens here.
#[derive(Debug, Clone)]
pub struct SqliteProductStore {
    pool: SqlitePool,
}

impl SqliteProductStore {
    /// Open (or create) the database file.
    ///
    /// Does not create the schema: a server started before the loader ever
    /// ran answers reads with a "no such table" error.
    pub async fn connect(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref();
        let options = SqliteConnectOptions::new()
            .filename(path)
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new().connect_with(options).await?;
        tracing::debug!(path = %path.display(), "opened product database");
        Ok(Self { pool })
    }

    /// Private in-memory database on a single pinned connection.
    ///
    /// Each `:memory:` connection is its own database, so the pool must never
    /// open a second one or recycle the first.
    pub async fn in_memory() -> Result<Self, StoreError> {
        let options = SqliteConnectOptions::from_str("sqlite::memory:")?;
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .min_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect_with(options)
            .await?;
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// `CREATE TABLE IF NOT EXISTS products (...)`.
    pub async fn ensure_schema(&self) -> Result<(), StoreError> {
        sqlx::query(CREATE_PRODUCTS_TABLE).execute(&self.pool).await?;
        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[async_trait]
impl ProductStore for SqliteProductStore {
    async fn insert(&self, product: &NewProduct) -> Result<ProductId, StoreError> {
        let result = sqlx::query(
            r#"
            INSERT INTO products (name, category, processor_type, memory, storage)
            VALUES (?1, ?2, ?3, ?4, ?5)
            "#,
        )
        .bind(&product.name)
        .bind(&product.category)
        .bind(&product.processor_type)
        .bind(&product.memory)
        .bind(&product.storage)
        .execute(&self.pool)
        .await?;

        Ok(ProductId::new(result.last_insert_rowid()))
    }

    async fn list(&self) -> Result<Vec<Product>, StoreError> {
        let rows = sqlx::query(
            r#"
            SELECT id, name, category, processor_type, memory, storage
            FROM products
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(product_from_row).collect()
    }
}

// NULL text (rows written by other tools) reads back as "".
fn product_from_row(row: &SqliteRow) -> Result<Product, StoreError> {
    let text = |column: &str| -> Result<String, sqlx::Error> {
        Ok(row.try_get::<Option<String>, _>(column)?.unwrap_or_default())
    };

    Ok(Product {
        id: ProductId::new(row.try_get::<i64, _>("id")?),
        name: text("name")?,
        category: text("category")?,
        processor_type: text("processor_type")?,
        memory: text("memory")?,
        storage: text("storage")?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn store() -> SqliteProductStore {
        let store = SqliteProductStore::in_memory().await.unwrap();
        store.ensure_schema().await.unwrap();
        store
    }

    #[tokio::test]
    async fn insert_then_list_round_trips_fields() {
        let store = store().await;
        let id = store
            .insert(&NewProduct::new("Laptop X", "Laptops", "Intel i7", "16GB", "512GB"))
            .await
            .unwrap();
        assert_eq!(id, ProductId::new(1));

        let products = store.list().await.unwrap();
        assert_eq!(
            products,
            vec![NewProduct::new("Laptop X", "Laptops", "Intel i7", "16GB", "512GB").with_id(id)]
        );
    }

    #[tokio::test]
    async fn ids_increase_in_insertion_order() {
        let store = store().await;
        let mut ids = Vec::new();
        for name in ["a", "b", "c"] {
            ids.push(store.insert(&NewProduct::new(name, "", "", "", "")).await.unwrap());
        }
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let listed: Vec<ProductId> = store.list().await.unwrap().into_iter().map(|p| p.id).collect();
        assert_eq!(listed, ids);
    }

    #[tokio::test]
    async fn ensure_schema_is_idempotent() {
        let store = store().await;
        store.insert(&NewProduct::default()).await.unwrap();
        store.ensure_schema().await.unwrap();
        assert_eq!(store.list().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn list_without_schema_fails() {
        let store = SqliteProductStore::in_memory().await.unwrap();
        let err = store.list().await.unwrap_err();
        assert!(matches!(err, StoreError::Database(_)));
        assert!(err.to_string().contains("no such table"), "{err}");
    }

    #[tokio::test]
    async fn null_text_reads_as_empty() {
        let store = store().await;
        sqlx::query("INSERT INTO products (name) VALUES ('only a name')")
            .execute(store.pool())
            .await
            .unwrap();

        let products = store.list().await.unwrap();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "only a name");
        assert_eq!(products[0].category, "");
        assert_eq!(products[0].storage, "");
    }
}

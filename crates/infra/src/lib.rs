//! Infrastructure layer: configuration, product storage, CSV ingestion.

pub mod config;
pub mod loader;
pub mod product_store;

pub use config::{CatalogConfig, ConfigError};
pub use loader::{load_csv, load_from_reader, LoadError, LoadReport};
pub use product_store::{InMemoryProductStore, ProductStore, SqliteProductStore, StoreError};

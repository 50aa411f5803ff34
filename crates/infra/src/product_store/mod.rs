//! Product persistence boundary.
//!
//! The loader writes through `ProductStore::insert`; the query service reads
//! through `ProductStore::list`. Nothing updates or deletes.

pub mod in_memory;
pub mod sqlite;
pub mod r#trait;

pub use in_memory::InMemoryProductStore;
pub use r#trait::{ProductStore, StoreError};
pub use sqlite::SqliteProductStore;

//! Product catalogue domain module.
//!
//! This crate holds the product record, its fixed column schema, and the
//! presentation pipeline the view runs over the fetched catalogue: filter
//! option derivation, checkbox filter selection, and table sort/pagination.
//! It is pure (no IO, no HTTP, no storage) and builds for `wasm32`.

pub mod filter;
pub mod product;
pub mod table;

pub use filter::{FilterOptions, FilterSelection};
pub use product::{Column, NewProduct, Product};
pub use table::{compare_alphanumeric, SortBy, SortDirection, TableState, DEFAULT_PAGE_SIZE};

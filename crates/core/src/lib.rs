//! `catalog-core` — identifiers and the domain error shared by every crate.
//!
//! Nothing in here touches IO; the crate also builds for `wasm32`.

pub mod error;
pub mod id;

pub use error::DomainError;
pub use id::ProductId;

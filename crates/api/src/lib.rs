//! HTTP API: the read-only product query service.

pub mod app;
pub mod server;

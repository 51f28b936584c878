//! HTTP handlers.

pub mod pricing_handler;

pub use pricing_handler::pricing_routes;

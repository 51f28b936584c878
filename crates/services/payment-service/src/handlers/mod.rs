//! HTTP handlers.

pub mod payment_handler;

pub use payment_handler::payment_routes;

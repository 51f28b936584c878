//! HTTP handlers.

pub mod driver_handler;

pub use driver_handler::driver_routes;

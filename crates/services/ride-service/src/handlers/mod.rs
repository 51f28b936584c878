//! HTTP handlers.

pub mod ride_handler;

pub use ride_handler::ride_routes;

//! Service layer - payment ledger use cases.

mod payment_service;

pub use payment_service::{PaymentManager, PaymentService};

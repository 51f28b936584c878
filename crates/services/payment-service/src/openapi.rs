//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{AuthorizePayment, CapturePayment, Payment, PaymentReceipt, PaymentStatus};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::payment_handler::authorize_payment,
        crate::handlers::payment_handler::capture_payment,
        crate::handlers::payment_handler::get_payment,
    ),
    components(schemas(Payment, PaymentStatus, PaymentReceipt, AuthorizePayment, CapturePayment)),
    tags(
        (name = "Payments", description = "Payment authorization and capture"),
    )
)]
pub struct ApiDoc;

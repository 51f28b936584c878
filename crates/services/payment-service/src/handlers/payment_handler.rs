//! Payment handlers.

use axum::{
    extract::State,
    response::Json,
    routing::{get, post},
    Router,
};

use common::{ApiPath, AppResult, ValidatedJson};
use domain::{AuthorizePayment, CapturePayment, Payment, PaymentReceipt};

use crate::state::AppState;

/// Create payment routes
pub fn payment_routes() -> Router<AppState> {
    Router::new()
        .route("/authorize", post(authorize_payment))
        .route("/capture", post(capture_payment))
        .route("/:id", get(get_payment))
}

/// Authorize a payment for a ride
#[utoipa::path(
    post,
    path = "/payments/authorize",
    tag = "Payments",
    request_body = AuthorizePayment,
    responses(
        (status = 200, description = "Payment authorized", body = PaymentReceipt),
        (status = 400, description = "Validation error")
    )
)]
pub async fn authorize_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<AuthorizePayment>,
) -> AppResult<Json<PaymentReceipt>> {
    let receipt = state.payment_service.authorize(payload).await?;
    Ok(Json(receipt))
}

/// Capture an authorized payment
#[utoipa::path(
    post,
    path = "/payments/capture",
    tag = "Payments",
    request_body = CapturePayment,
    responses(
        (status = 200, description = "Payment captured", body = PaymentReceipt),
        (status = 400, description = "Payment is not in AUTHORIZED status"),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn capture_payment(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CapturePayment>,
) -> AppResult<Json<PaymentReceipt>> {
    let receipt = state.payment_service.capture(payload.payment_id).await?;
    Ok(Json(receipt))
}

/// Get payment by ID
#[utoipa::path(
    get,
    path = "/payments/{id}",
    tag = "Payments",
    params(
        ("id" = i32, Path, description = "Payment ID")
    ),
    responses(
        (status = 200, description = "Payment", body = Payment),
        (status = 404, description = "Payment not found")
    )
)]
pub async fn get_payment(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Payment>> {
    let payment = state.payment_service.get_payment(id).await?;
    Ok(Json(payment))
}

//! Ride handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};

use common::{ApiPath, AppResult, ValidatedJson};
use domain::{CreateRide, RideResponse};

use crate::state::AppState;

/// Create ride routes
pub fn ride_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_ride))
        .route("/:id", get(get_ride))
}

/// Book a ride
#[utoipa::path(
    post,
    path = "/rides",
    tag = "Rides",
    request_body = CreateRide,
    responses(
        (status = 201, description = "Ride confirmed", body = RideResponse),
        (status = 400, description = "Validation error"),
        (status = 404, description = "No available driver or no price for the route"),
        (status = 502, description = "A downstream service call failed")
    )
)]
pub async fn create_ride(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateRide>,
) -> AppResult<(StatusCode, Json<RideResponse>)> {
    let ride = state.ride_service.create_ride(payload).await?;
    Ok((StatusCode::CREATED, Json(ride)))
}

/// Get ride by ID
#[utoipa::path(
    get,
    path = "/rides/{id}",
    tag = "Rides",
    params(
        ("id" = i32, Path, description = "Ride ID")
    ),
    responses(
        (status = 200, description = "Ride", body = RideResponse),
        (status = 404, description = "Ride not found")
    )
)]
pub async fn get_ride(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<RideResponse>> {
    let ride = state.ride_service.get_ride(id).await?;
    Ok(Json(ride))
}

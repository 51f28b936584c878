//! Driver handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, patch, post},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{ApiPath, ApiQuery, AppResult, ValidatedJson};
use domain::{CreateDriver, Driver, DriverFilter, UpdateAvailability};

use crate::state::AppState;

/// Optional list filters
#[derive(Debug, Default, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DriverQuery {
    /// Only drivers with this availability
    pub available: Option<bool>,
    /// Only drivers in this zone (exact match)
    pub zone: Option<String>,
}

impl From<DriverQuery> for DriverFilter {
    fn from(query: DriverQuery) -> Self {
        DriverFilter {
            available: query.available,
            zone: query.zone,
        }
    }
}

/// Create driver routes
pub fn driver_routes() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver).get(list_drivers))
        .route("/:id", get(get_driver))
        .route("/:id/availability", patch(update_availability))
}

/// Register a driver
#[utoipa::path(
    post,
    path = "/drivers",
    tag = "Drivers",
    request_body = CreateDriver,
    responses(
        (status = 201, description = "Driver registered", body = Driver),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_driver(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreateDriver>,
) -> AppResult<(StatusCode, Json<Driver>)> {
    let driver = state.driver_service.register_driver(payload).await?;
    Ok((StatusCode::CREATED, Json(driver)))
}

/// List drivers
#[utoipa::path(
    get,
    path = "/drivers",
    tag = "Drivers",
    params(DriverQuery),
    responses(
        (status = 200, description = "Drivers matching the filters", body = Vec<Driver>)
    )
)]
pub async fn list_drivers(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<DriverQuery>,
) -> AppResult<Json<Vec<Driver>>> {
    let drivers = state.driver_service.list_drivers(query.into()).await?;
    Ok(Json(drivers))
}

/// Get driver by ID
#[utoipa::path(
    get,
    path = "/drivers/{id}",
    tag = "Drivers",
    params(
        ("id" = i32, Path, description = "Driver ID")
    ),
    responses(
        (status = 200, description = "Driver", body = Driver),
        (status = 404, description = "Driver not found")
    )
)]
pub async fn get_driver(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
) -> AppResult<Json<Driver>> {
    let driver = state.driver_service.get_driver(id).await?;
    Ok(Json(driver))
}

/// Set driver availability
#[utoipa::path(
    patch,
    path = "/drivers/{id}/availability",
    tag = "Drivers",
    params(
        ("id" = i32, Path, description = "Driver ID")
    ),
    request_body = UpdateAvailability,
    responses(
        (status = 200, description = "Availability updated", body = Driver),
        (status = 404, description = "Driver not found")
    )
)]
pub async fn update_availability(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<i32>,
    ValidatedJson(payload): ValidatedJson<UpdateAvailability>,
) -> AppResult<Json<Driver>> {
    let driver = state
        .driver_service
        .set_availability(id, payload.available)
        .await?;
    Ok(Json(driver))
}

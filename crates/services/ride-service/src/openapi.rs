//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{
    CreateRide, DriverSummary, PaymentStatus, PaymentSummary, RideResponse, RideStatus,
};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::ride_handler::create_ride,
        crate::handlers::ride_handler::get_ride,
    ),
    components(schemas(
        CreateRide,
        RideResponse,
        RideStatus,
        DriverSummary,
        PaymentSummary,
        PaymentStatus
    )),
    tags(
        (name = "Rides", description = "Ride booking endpoints"),
    )
)]
pub struct ApiDoc;

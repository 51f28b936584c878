//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{CreateDriver, Driver, UpdateAvailability};

/// API documentation struct.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::driver_handler::create_driver,
        crate::handlers::driver_handler::list_drivers,
        crate::handlers::driver_handler::get_driver,
        crate::handlers::driver_handler::update_availability,
    ),
    components(schemas(Driver, CreateDriver, UpdateAvailability)),
    tags(
        (name = "Drivers", description = "Driver registry endpoints"),
    )
)]
pub struct ApiDoc;

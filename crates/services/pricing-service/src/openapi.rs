//! OpenAPI documentation.

use utoipa::OpenApi;

use domain::{CreatePriceRule, PriceQuote, PriceRule};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::pricing_handler::create_price_rule,
        crate::handlers::pricing_handler::get_price,
    ),
    components(schemas(PriceRule, CreatePriceRule, PriceQuote)),
    tags(
        (name = "Pricing", description = "Route pricing endpoints"),
    )
)]
pub struct ApiDoc;

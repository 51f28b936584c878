//! Pricing handlers.

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use utoipa::IntoParams;

use common::{ApiQuery, AppError, AppResult, ValidatedJson};
use domain::{CreatePriceRule, PriceQuote, PriceRule};

use crate::state::AppState;

/// Route lookup parameters
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct PriceQuery {
    /// Origin zone
    #[serde(rename = "from")]
    pub from_zone: Option<String>,
    /// Destination zone
    #[serde(rename = "to")]
    pub to_zone: Option<String>,
}

/// Create pricing routes
pub fn pricing_routes() -> Router<AppState> {
    Router::new()
        .route("/prices", post(create_price_rule))
        .route("/price", get(get_price))
}

/// Add a price rule
#[utoipa::path(
    post,
    path = "/prices",
    tag = "Pricing",
    request_body = CreatePriceRule,
    responses(
        (status = 201, description = "Price rule created", body = PriceRule),
        (status = 400, description = "Validation error")
    )
)]
pub async fn create_price_rule(
    State(state): State<AppState>,
    ValidatedJson(payload): ValidatedJson<CreatePriceRule>,
) -> AppResult<(StatusCode, Json<PriceRule>)> {
    let rule = state.pricing_service.create_rule(payload).await?;
    Ok((StatusCode::CREATED, Json(rule)))
}

/// Quote a route
#[utoipa::path(
    get,
    path = "/price",
    tag = "Pricing",
    params(PriceQuery),
    responses(
        (status = 200, description = "Price for the route", body = PriceQuote),
        (status = 400, description = "Missing zone parameter"),
        (status = 404, description = "No rule for the route")
    )
)]
pub async fn get_price(
    State(state): State<AppState>,
    ApiQuery(query): ApiQuery<PriceQuery>,
) -> AppResult<Json<PriceQuote>> {
    let from_zone = required_zone(query.from_zone, "from")?;
    let to_zone = required_zone(query.to_zone, "to")?;

    let quote = state.pricing_service.get_price(&from_zone, &to_zone).await?;
    Ok(Json(quote))
}

fn required_zone(value: Option<String>, name: &str) -> AppResult<String> {
    match value {
        Some(zone) if !zone.trim().is_empty() => Ok(zone),
        _ => Err(AppError::validation(format!(
            "Query parameter '{}' is required",
            name
        ))),
    }
}

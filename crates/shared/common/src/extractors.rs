//! Request extractors that reject with the JSON error body.

use axum::{
    async_trait,
    extract::{
        rejection::JsonRejection, FromRequest, FromRequestParts, Path, Query, Request,
    },
    http::request::Parts,
    Json,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use crate::error::AppError;

/// JSON extractor that automatically validates the payload.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for ValidatedJson<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Validate,
    Json<T>: FromRequest<S, Rejection = JsonRejection>,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;

        value.validate().map_err(|e| {
            // Report the first failing field
            let message = e
                .field_errors()
                .values()
                .next()
                .and_then(|errors| errors.first())
                .and_then(|error| error.message.as_ref())
                .map(|msg| msg.to_string())
                .unwrap_or_else(|| "Validation failed".to_string());
            AppError::validation(message)
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Query string extractor; malformed parameters become `VALIDATION_ERROR`.
pub struct ApiQuery<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiQuery<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(ApiQuery(value))
    }
}

/// Path parameter extractor; unparsable segments become `VALIDATION_ERROR`.
pub struct ApiPath<T>(pub T);

#[async_trait]
impl<S, T> FromRequestParts<S> for ApiPath<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Send,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(value) = Path::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::validation(e.body_text()))?;
        Ok(ApiPath(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::StatusCode,
        routing::get,
        Router,
    };
    use serde::Deserialize;
    use tower::ServiceExt;

    use crate::error::ErrorResponse;

    #[derive(Deserialize)]
    struct Filter {
        available: Option<bool>,
    }

    async fn by_id(ApiPath(id): ApiPath<i32>) -> String {
        id.to_string()
    }

    async fn filtered(ApiQuery(filter): ApiQuery<Filter>) -> String {
        format!("{:?}", filter.available)
    }

    fn router() -> Router {
        Router::new()
            .route("/items/:id", get(by_id))
            .route("/items", get(filtered))
    }

    async fn call(uri: &str) -> (StatusCode, Vec<u8>) {
        let response = router()
            .oneshot(axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, bytes.to_vec())
    }

    #[tokio::test]
    async fn well_formed_parameters_pass_through() {
        assert_eq!(call("/items/7").await, (StatusCode::OK, b"7".to_vec()));
        assert_eq!(
            call("/items?available=true").await,
            (StatusCode::OK, b"Some(true)".to_vec())
        );
    }

    #[tokio::test]
    async fn bad_path_segment_is_json_validation_error() {
        let (status, bytes) = call("/items/abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
    }

    #[tokio::test]
    async fn bad_query_value_is_json_validation_error() {
        let (status, bytes) = call("/items?available=maybe").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let body: ErrorResponse = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body.error.code, "VALIDATION_ERROR");
    }
}

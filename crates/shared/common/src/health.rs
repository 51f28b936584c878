//! Static health endpoint shared by every service.

use axum::{response::Json, routing::get, Router};
use serde::{Deserialize, Serialize};

/// Health check response. No dependency checks are performed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub service: String,
}

impl HealthResponse {
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
        }
    }
}

/// `GET /` returning `{"status":"ok","service":<service>}`.
pub fn health_routes<S>(service: &'static str) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/", get(move || async move { Json(HealthResponse::ok(service)) }))
}

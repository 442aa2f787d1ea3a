//! Health check endpoint

use axum::{http::StatusCode, response::Response, routing::get, Router};
use serde::Serialize;

use crate::http::response::respond;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// GET /health
async fn health() -> Response {
    respond(
        StatusCode::OK,
        &HealthResponse {
            status: "ok",
            version: env!("CARGO_PKG_VERSION"),
        },
    )
}

/// Health routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new().route("/health", get(health))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn health_returns_ok() {
        let response = health().await;
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
    }
}

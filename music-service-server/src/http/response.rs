//! Response encoder
//!
//! Every response, success or error, goes through [`respond`]:
//! `content-type: application/json` and a pretty-printed body.

use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{HeaderValue, StatusCode};
use axum::response::Response;
use serde::Serialize;
use serde_json::json;

const FALLBACK_BODY: &str = "{\n  \"error\": \"failed to encode response\"\n}";

/// Encode `payload` with the given status.
///
/// 204 responses carry the header but no body.
pub fn respond<T: Serialize + ?Sized>(status: StatusCode, payload: &T) -> Response {
    let body = if status == StatusCode::NO_CONTENT {
        Body::empty()
    } else {
        match serde_json::to_string_pretty(payload) {
            Ok(text) => Body::from(text),
            Err(e) => {
                tracing::error!("Response encoding error: {}", e);
                return build(StatusCode::INTERNAL_SERVER_ERROR, Body::from(FALLBACK_BODY));
            }
        }
    };
    build(status, body)
}

/// `{"success": message}`
pub fn success(status: StatusCode, message: impl Into<String>) -> Response {
    respond(status, &json!({ "success": message.into() }))
}

/// `{"error": message}`
pub fn error(status: StatusCode, message: impl Into<String>) -> Response {
    respond(status, &json!({ "error": message.into() }))
}

fn build(status: StatusCode, body: Body) -> Response {
    let mut response = Response::new(body);
    *response.status_mut() = status;
    response
        .headers_mut()
        .insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    #[tokio::test]
    async fn success_body_is_pretty_json() {
        let response = success(StatusCode::CREATED, "done");
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&bytes[..], b"{\n  \"success\": \"done\"\n}");
    }

    #[tokio::test]
    async fn no_content_has_no_body() {
        let response = error(StatusCode::NO_CONTENT, "No songs found.");
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(response.headers()[CONTENT_TYPE], "application/json");

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert!(bytes.is_empty());
    }
}

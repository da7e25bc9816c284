//! Middleware shared by the event source and the reservation server

use crate::http::headers::X_REQUEST_ID;
use axum::{extract::Request, http::HeaderValue, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};
use uuid::Uuid;

/// Request ID middleware - ensures every request has a unique ID for tracing
///
/// A valid UUID supplied by the caller is kept; anything else is replaced by
/// a fresh v7 UUID. The ID is echoed on the response.
pub async fn request_id_middleware(mut request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .and_then(|s| Uuid::parse_str(s).ok())
        .unwrap_or_else(Uuid::now_v7);

    // Hyphenated UUIDs are plain ASCII
    let header_value = HeaderValue::from_str(&request_id.to_string()).ok();

    if let Some(value) = &header_value {
        request.headers_mut().insert(X_REQUEST_ID, value.clone());
    }

    let mut response = next.run(request).await;

    if let Some(value) = header_value {
        response.headers_mut().insert(X_REQUEST_ID, value);
    }

    response
}

/// Logging middleware - logs request/response details with timing
///
/// For streaming responses the timing covers the time to response headers,
/// not the lifetime of the stream.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let start = Instant::now();

    let method = request.method().clone();
    let uri = request.uri().clone();
    let request_id = request
        .headers()
        .get(X_REQUEST_ID)
        .and_then(|h| h.to_str().ok())
        .unwrap_or("unknown")
        .to_string();

    info!(
        request_id = request_id,
        method = %method,
        path = %uri.path(),
        "Incoming request"
    );

    let response = next.run(request).await;
    let duration = start.elapsed();
    let status = response.status();

    if status.is_server_error() {
        warn!(
            request_id = request_id,
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request failed"
        );
    } else {
        info!(
            request_id = request_id,
            method = %method,
            path = %uri.path(),
            status = status.as_u16(),
            duration_ms = duration.as_millis(),
            "Request completed"
        );
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::StatusCode;
    use axum::middleware::from_fn;
    use std::convert::Infallible;
    use tower::ServiceExt;

    async fn echo_request_id(req: Request) -> Result<Response, Infallible> {
        let request_id = req
            .headers()
            .get(X_REQUEST_ID)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("missing")
            .to_string();

        Ok(Response::builder()
            .status(StatusCode::OK)
            .body(Body::from(request_id))
            .unwrap())
    }

    #[tokio::test]
    async fn test_request_id_generation() {
        let service = tower::ServiceBuilder::new()
            .layer(from_fn(request_id_middleware))
            .service(tower::service_fn(echo_request_id));

        let request = Request::builder()
            .method("GET")
            .uri("/test")
            .body(Body::empty())
            .unwrap();

        let response = service.oneshot(request).await.unwrap();

        let request_id = response.headers().get(X_REQUEST_ID).unwrap();
        let uuid = Uuid::parse_str(request_id.to_str().unwrap()).unwrap();
        assert_eq!(uuid.get_version_num(), 7);
    }

    #[tokio::test]
    async fn test_existing_request_id_is_kept() {
        let service = tower::ServiceBuilder::new()
            .layer(from_fn(request_id_middleware))
            .service(tower::service_fn(echo_request_id));

        let existing = Uuid::now_v7().to_string();
        let request = Request::builder()
            .uri("/test")
            .header(X_REQUEST_ID, &existing)
            .body(Body::empty())
            .unwrap();

        let response = service.oneshot(request).await.unwrap();
        assert_eq!(response.headers()[X_REQUEST_ID], existing.as_str());
    }

    #[tokio::test]
    async fn test_invalid_request_id_is_replaced() {
        let service = tower::ServiceBuilder::new()
            .layer(from_fn(request_id_middleware))
            .service(tower::service_fn(echo_request_id));

        let request = Request::builder()
            .uri("/test")
            .header(X_REQUEST_ID, "not-a-uuid")
            .body(Body::empty())
            .unwrap();

        let response = service.oneshot(request).await.unwrap();
        let request_id = response.headers()[X_REQUEST_ID].to_str().unwrap();
        assert!(Uuid::parse_str(request_id).is_ok());
    }

    #[tokio::test]
    async fn test_logging_middleware_passes_response_through() {
        let service = tower::ServiceBuilder::new()
            .layer(from_fn(logging_middleware))
            .service(tower::service_fn(echo_request_id));

        let request = Request::builder()
            .uri("/test")
            .body(Body::empty())
            .unwrap();

        let response = service.oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }
}

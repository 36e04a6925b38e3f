//! Request ID middleware for request tracing and correlation.
//!
//! Every response carries an `x-request-id`. An id supplied by an upstream
//! proxy is kept; otherwise a UUID v4 is generated. The id is recorded on the
//! request span opened by [`http_trace_span`] and tagged on the Sentry scope.

use axum::{
    extract::Request,
    http::{HeaderValue, Method, Uri},
    middleware::Next,
    response::Response,
};
use tracing::Span;
use uuid::Uuid;

/// The HTTP header name for request IDs.
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Longest upstream request id accepted before a fresh one is generated.
const MAX_REQUEST_ID_LEN: usize = 128;

/// Span used by the trace layer for every request.
///
/// Declares an empty `request_id` field that [`request_id_middleware`] fills
/// in once the id is known.
pub fn http_trace_span<B>(request: &axum::http::Request<B>) -> Span {
    make_span(request.method(), request.uri())
}

fn make_span(method: &Method, uri: &Uri) -> Span {
    tracing::info_span!(
        "http_request",
        method = %method,
        path = %uri.path(),
        request_id = tracing::field::Empty,
    )
}

/// Middleware that ensures every request has a unique request ID.
pub async fn request_id_middleware(request: Request, next: Next) -> Response {
    let request_id = request
        .headers()
        .get(REQUEST_ID_HEADER)
        .and_then(|h| h.to_str().ok())
        .filter(|id| is_acceptable_request_id(id))
        .map_or_else(|| Uuid::new_v4().to_string(), String::from);

    Span::current().record("request_id", request_id.as_str());

    sentry::configure_scope(|scope| {
        scope.set_tag("request_id", &request_id);
    });

    let mut response = next.run(request).await;

    if let Ok(value) = HeaderValue::from_str(&request_id) {
        response.headers_mut().insert(REQUEST_ID_HEADER, value);
    }

    response
}

fn is_acceptable_request_id(id: &str) -> bool {
    !id.is_empty()
        && id.len() <= MAX_REQUEST_ID_LEN
        && id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.'))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::{Router, body::Body, routing::get};
    use tower::ServiceExt;

    use super::*;

    fn app() -> Router {
        Router::new()
            .route("/", get(|| async { "ok" }))
            .layer(axum::middleware::from_fn(request_id_middleware))
    }

    #[tokio::test]
    async fn test_generates_request_id() {
        let response = app()
            .oneshot(axum::http::Request::new(Body::empty()))
            .await
            .unwrap();

        let id = response.headers().get(REQUEST_ID_HEADER).unwrap();
        assert!(Uuid::parse_str(id.to_str().unwrap()).is_ok());
    }

    #[tokio::test]
    async fn test_keeps_upstream_request_id() {
        let request = axum::http::Request::builder()
            .header(REQUEST_ID_HEADER, "edge-42")
            .body(Body::empty())
            .unwrap();
        let response = app().oneshot(request).await.unwrap();

        assert_eq!(response.headers().get(REQUEST_ID_HEADER).unwrap(), "edge-42");
    }

    #[test]
    fn test_rejects_unreasonable_request_ids() {
        assert!(is_acceptable_request_id("abc-123_x.y"));
        assert!(!is_acceptable_request_id(""));
        assert!(!is_acceptable_request_id("has space"));
        assert!(!is_acceptable_request_id(&"a".repeat(MAX_REQUEST_ID_LEN + 1)));
    }
}

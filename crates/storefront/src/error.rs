//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures errors to Sentry before
//! responding to the client. Route handlers that can fail return
//! `Result<T, AppError>`.

use axum::{
    extract::rejection::FormRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use deskgear_core::{InvalidSortMode, ProductId};
use serde_json::Value;
use thiserror::Error;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum AppError {
    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<InvalidSortMode> for AppError {
    fn from(err: InvalidSortMode) -> Self {
        Self::BadRequest(err.to_string())
    }
}

impl From<FormRejection> for AppError {
    fn from(rejection: FormRejection) -> Self {
        Self::BadRequest(rejection.body_text())
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        Self::Internal(format!("template rendering failed: {err}"))
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Only server errors reach Sentry
        if matches!(self, Self::Internal(_)) {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        } else {
            tracing::debug!(error = %self, "Client error");
        }

        let status = match &self {
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
        };

        // Don't expose internal error details to clients
        let message = match &self {
            Self::Internal(_) => "Internal server error".to_string(),
            _ => self.to_string(),
        };

        (status, message).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

/// Record a cart mutation as a Sentry breadcrumb.
///
/// The trail shows up on any error reported later in the same scope.
pub fn cart_breadcrumb(message: &str, product_id: ProductId, items: usize) {
    let mut breadcrumb = sentry::Breadcrumb {
        category: Some("cart".to_string()),
        message: Some(message.to_string()),
        level: sentry::Level::Info,
        ..Default::default()
    };
    breadcrumb
        .data
        .insert("product_id".to_string(), Value::from(product_id.as_i32()));
    breadcrumb.data.insert("items".to_string(), Value::from(items));

    sentry::add_breadcrumb(breadcrumb);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("/images/lamp.jpg".to_string());
        assert_eq!(err.to_string(), "Not found: /images/lamp.jpg");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_invalid_sort_mode_is_bad_request() {
        let err = AppError::from(InvalidSortMode("cheapest".to_string()));
        assert!(matches!(err, AppError::BadRequest(ref msg) if msg.contains("cheapest")));
    }

    #[tokio::test]
    #[allow(clippy::unwrap_used)]
    async fn test_internal_error_hides_details() {
        let response = AppError::Internal("template exploded".to_string()).into_response();
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"Internal server error");
    }

    #[test]
    fn test_status_codes() {
        let cases = [
            (AppError::NotFound("/checkout".to_string()), StatusCode::NOT_FOUND),
            (AppError::BadRequest("sort".to_string()), StatusCode::BAD_REQUEST),
            (AppError::Internal("render".to_string()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[tokio::test]
    #[allow(clippy::unwrap_used)]
    async fn test_undecodable_form_is_bad_request() {
        use axum::{
            Form,
            body::Body,
            extract::FromRequest,
            http::{Request, header},
        };

        #[derive(Debug, serde::Deserialize)]
        struct IdForm {
            #[allow(dead_code)]
            product_id: ProductId,
        }

        let request = Request::post("/cart/add")
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from("product_id=abc"))
            .unwrap();
        let rejection = Form::<IdForm>::from_request(request, &()).await.unwrap_err();

        let err = AppError::from(rejection);
        assert!(matches!(err, AppError::BadRequest(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_cart_breadcrumb_without_client_is_noop() {
        cart_breadcrumb("Added to cart", ProductId::new(3), 1);
    }
}

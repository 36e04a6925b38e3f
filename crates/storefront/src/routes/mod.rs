//! HTTP route handlers for storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Catalog page with cart sidebar (?sort=)
//! GET  /health                 - Health check
//!
//! # Products (HTMX fragments)
//! GET  /products               - Product list region for ?sort=
//!
//! # Cart (HTMX fragments, plain form fallback)
//! GET  /cart                   - Cart region
//! POST /cart/add               - Add one unit (returns cart region)
//! POST /cart/remove            - Remove one unit (returns cart region)
//!
//! # Assets
//! GET  /images/{file}          - Product image, placeholder redirect when missing
//! GET  /static/*               - Stylesheet and other static assets
//! ```

pub mod cart;
pub mod home;
pub mod images;
pub mod products;

use axum::{
    Router,
    body::Body,
    http::Uri,
    routing::{get, post},
};
use deskgear_core::{InvalidSortMode, SortMode};
use serde::Deserialize;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::AppError;
use crate::middleware::{http_trace_span, request_id_middleware, security_headers_middleware};
use crate::state::AppState;

/// Sort selector query parameters.
#[derive(Debug, Default, Deserialize)]
pub struct SortQuery {
    pub sort: Option<String>,
}

impl SortQuery {
    /// The requested sort mode, or `default` when none was given.
    ///
    /// # Errors
    ///
    /// Returns `InvalidSortMode` if the parameter names an unknown mode.
    pub fn mode_or(&self, default: SortMode) -> Result<SortMode, InvalidSortMode> {
        match self.sort.as_deref().map(str::trim) {
            None | Some("") => Ok(default),
            Some(value) => value.parse(),
        }
    }
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/remove", post(cart::remove))
}

/// Create all page and fragment routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Catalog page
        .route("/", get(home::index))
        // Product list fragment
        .route("/products", get(products::list))
        // Cart fragments
        .nest("/cart", cart_routes())
}

/// Build the complete application: routes, assets and middleware.
///
/// Sentry layers are added by the binary so tests can drive the router
/// without a Sentry client.
pub fn app(state: AppState) -> Router {
    let image_service = images::image_service(state.config());
    let static_service = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/images", image_service)
        .nest_service("/static", static_service)
        .fallback(not_found)
        .layer(axum::middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(axum::middleware::from_fn(request_id_middleware))
        .layer(TraceLayer::new_for_http().make_span_with(http_trace_span::<Body>))
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running.
async fn health() -> &'static str {
    "ok"
}

/// Fallback for unknown paths.
async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

/// Returns true when the request was issued by HTMX.
fn is_htmx(headers: &axum::http::HeaderMap) -> bool {
    headers
        .get("hx-request")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{HeaderMap, HeaderValue};

    use super::*;

    #[test]
    fn test_sort_query_defaults_when_missing() {
        let query = SortQuery::default();
        assert_eq!(query.mode_or(SortMode::Descending).unwrap(), SortMode::Descending);
    }

    #[test]
    fn test_sort_query_defaults_when_blank() {
        let query = SortQuery {
            sort: Some("  ".to_string()),
        };
        assert_eq!(query.mode_or(SortMode::None).unwrap(), SortMode::None);
    }

    #[test]
    fn test_sort_query_parses_mode() {
        let query = SortQuery {
            sort: Some("ascending".to_string()),
        };
        assert_eq!(query.mode_or(SortMode::Descending).unwrap(), SortMode::Ascending);
    }

    #[test]
    fn test_sort_query_rejects_unknown_mode() {
        let query = SortQuery {
            sort: Some("popular".to_string()),
        };
        assert!(query.mode_or(SortMode::None).is_err());
    }

    #[test]
    fn test_is_htmx() {
        let mut headers = HeaderMap::new();
        assert!(!is_htmx(&headers));

        headers.insert("hx-request", HeaderValue::from_static("true"));
        assert!(is_htmx(&headers));
    }
}

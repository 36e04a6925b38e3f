//! Integration tests for the Deskgear storefront.
//!
//! The tests drive the full router in-process with `tower::ServiceExt`,
//! so no server or network is needed.
//!
//! ```bash
//! cargo test -p deskgear-integration-tests
//! ```

use std::path::PathBuf;

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, Response, header};
use deskgear_core::ProductId;
use deskgear_storefront::catalog::Catalog;
use deskgear_storefront::config::StorefrontConfig;
use deskgear_storefront::routes;
use deskgear_storefront::state::AppState;

/// Directory holding the storefront's stylesheet and image folders.
#[must_use]
pub fn static_dir() -> PathBuf {
    PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static"))
}

/// Configuration pointing at the storefront's asset directories.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    let static_dir = static_dir();
    StorefrontConfig {
        image_dir: static_dir.join("images"),
        static_dir,
        ..StorefrontConfig::default()
    }
}

/// Shared state over the built-in catalog with an empty cart.
///
/// # Panics
///
/// Panics if the built-in catalog is inconsistent.
#[must_use]
#[allow(clippy::expect_used)]
pub fn test_state() -> AppState {
    let catalog = Catalog::builtin().expect("built-in catalog is valid");
    AppState::new(test_config(), catalog)
}

/// The full application router over [`test_state`].
#[must_use]
pub fn test_app() -> Router {
    routes::app(test_state())
}

/// A `GET` request.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[must_use]
#[allow(clippy::expect_used)]
pub fn get(uri: &str) -> Request<Body> {
    Request::get(uri)
        .body(Body::empty())
        .expect("valid request")
}

/// A urlencoded form `POST`, optionally marked as issued by HTMX.
///
/// # Panics
///
/// Panics if `uri` is not a valid request target.
#[must_use]
#[allow(clippy::expect_used)]
pub fn form_post(uri: &str, body: &str, htmx: bool) -> Request<Body> {
    let mut builder = Request::post(uri)
        .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded");
    if htmx {
        builder = builder.header("HX-Request", "true");
    }
    builder
        .body(Body::from(body.to_string()))
        .expect("valid request")
}

/// A cart action for `product_id` posted from the page in ascending order.
#[must_use]
pub fn cart_post(uri: &str, product_id: ProductId, htmx: bool) -> Request<Body> {
    form_post(uri, &format!("product_id={product_id}&sort=ascending"), htmx)
}

/// Collect a response body as UTF-8 text.
///
/// # Panics
///
/// Panics if the body cannot be read or is not UTF-8.
#[allow(clippy::expect_used)]
pub async fn body_text(response: Response<Body>) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("readable body");
    String::from_utf8(bytes.to_vec()).expect("utf-8 body")
}

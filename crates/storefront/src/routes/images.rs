//! Product image serving with placeholder fallback.
//!
//! Images are served from the configured image directory. A request for an
//! image that does not exist is answered with a temporary redirect to the
//! placeholder image, so a missing file never breaks a product card.

use axum::{
    extract::State,
    http::Uri,
    response::Redirect,
    routing::{MethodRouter, get},
};
use tower_http::services::ServeDir;

use crate::config::StorefrontConfig;

/// Build the service mounted under `/images`.
pub fn image_service(config: &StorefrontConfig) -> ServeDir<MethodRouter> {
    let placeholder = get(placeholder_redirect).with_state(config.placeholder_image_url.clone());
    ServeDir::new(&config.image_dir).fallback(placeholder)
}

async fn placeholder_redirect(State(placeholder_url): State<String>, uri: Uri) -> Redirect {
    tracing::debug!(path = %uri.path(), "Product image missing, serving placeholder");
    Redirect::temporary(&placeholder_url)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::path::PathBuf;

    use axum::{
        body::Body,
        http::{Request, StatusCode, header},
    };
    use tower::ServiceExt;

    use super::*;

    fn config() -> StorefrontConfig {
        StorefrontConfig {
            // The stylesheet directory stands in for an image directory.
            image_dir: PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/static/css")),
            ..StorefrontConfig::default()
        }
    }

    #[tokio::test]
    async fn test_serves_existing_file() {
        let response = image_service(&config())
            .oneshot(Request::get("/main.css").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_missing_image_redirects_to_placeholder() {
        let response = image_service(&config())
            .oneshot(Request::get("/lamp.jpg").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::TEMPORARY_REDIRECT);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://via.placeholder.com/250x150?text=Image"
        );
    }
}

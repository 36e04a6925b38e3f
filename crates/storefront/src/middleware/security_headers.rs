//! Security headers middleware for XSS, clickjacking, and isolation protection.
//!
//! Adds restrictive security headers to all responses. The content security
//! policy only opens what the page needs: the HTMX script host and the host
//! serving the placeholder product image.

use axum::{
    extract::{Request, State},
    http::{
        HeaderName, HeaderValue,
        header::{
            CACHE_CONTROL, CONTENT_SECURITY_POLICY, REFERRER_POLICY, X_CONTENT_TYPE_OPTIONS,
            X_FRAME_OPTIONS,
        },
    },
    middleware::Next,
    response::Response,
};
use url::Url;

use crate::state::AppState;

/// Host the page loads HTMX from.
pub const HTMX_SCRIPT_ORIGIN: &str = "https://unpkg.com";

/// Path prefixes whose responses may be cached by the browser.
const CACHEABLE_PREFIXES: &[&str] = &["/static/", "/images/"];

/// Add security headers to all responses.
///
/// Headers applied:
/// - `X-Frame-Options: DENY` - Prevent clickjacking
/// - `X-Content-Type-Options: nosniff` - Prevent MIME sniffing
/// - `Referrer-Policy: no-referrer` - Zero referrer leakage
/// - `Content-Security-Policy` - See [`content_security_policy`]
/// - `Permissions-Policy` - Deny sensitive features
/// - `Cache-Control: no-store` - Pages and fragments carry live cart state;
///   static assets and images are left cacheable
/// - `Cross-Origin-Opener-Policy: same-origin` - Process isolation
pub async fn security_headers_middleware(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let cacheable = CACHEABLE_PREFIXES
        .iter()
        .any(|prefix| request.uri().path().starts_with(prefix));

    let mut response = next.run(request).await;
    let headers = response.headers_mut();

    headers.insert(X_FRAME_OPTIONS, HeaderValue::from_static("DENY"));
    headers.insert(X_CONTENT_TYPE_OPTIONS, HeaderValue::from_static("nosniff"));
    headers.insert(REFERRER_POLICY, HeaderValue::from_static("no-referrer"));

    let csp = content_security_policy(&state.config().placeholder_image_url);
    match HeaderValue::from_str(&csp) {
        Ok(value) => {
            headers.insert(CONTENT_SECURITY_POLICY, value);
        }
        Err(e) => tracing::warn!("Invalid content security policy header: {e}"),
    }

    headers.insert(
        HeaderName::from_static("permissions-policy"),
        HeaderValue::from_static(
            "camera=(), \
             geolocation=(), \
             microphone=(), \
             payment=(), \
             usb=()",
        ),
    );

    if !cacheable {
        headers.insert(CACHE_CONTROL, HeaderValue::from_static("no-store, max-age=0"));
    }

    headers.insert(
        HeaderName::from_static("cross-origin-opener-policy"),
        HeaderValue::from_static("same-origin"),
    );

    response
}

/// Build the content security policy for the page.
///
/// ```text
/// default-src 'none';
/// script-src 'self' https://unpkg.com;
/// style-src 'self';
/// img-src 'self' <placeholder image origin>;
/// connect-src 'self';
/// base-uri 'self';
/// form-action 'self';
/// frame-ancestors 'none'
/// ```
#[must_use]
pub fn content_security_policy(placeholder_image_url: &str) -> String {
    let img_src = Url::parse(placeholder_image_url)
        .ok()
        .map(|url| url.origin())
        .filter(url::Origin::is_tuple)
        .map_or_else(
            || "'self'".to_string(),
            |origin| format!("'self' {}", origin.ascii_serialization()),
        );

    format!(
        "default-src 'none'; \
         script-src 'self' {HTMX_SCRIPT_ORIGIN}; \
         style-src 'self'; \
         img-src {img_src}; \
         connect-src 'self'; \
         base-uri 'self'; \
         form-action 'self'; \
         frame-ancestors 'none'"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_csp_allows_placeholder_origin() {
        let csp = content_security_policy("https://via.placeholder.com/250x150?text=Image");
        assert!(csp.contains("img-src 'self' https://via.placeholder.com;"));
    }

    #[test]
    fn test_csp_allows_htmx_host() {
        let csp = content_security_policy("https://via.placeholder.com/x.png");
        assert!(csp.contains("script-src 'self' https://unpkg.com;"));
    }

    #[test]
    fn test_csp_keeps_non_default_port() {
        let csp = content_security_policy("http://localhost:8081/placeholder.png");
        assert!(csp.contains("img-src 'self' http://localhost:8081;"));
    }

    #[test]
    fn test_csp_falls_back_to_self_for_unparseable_url() {
        let csp = content_security_policy("/static/placeholder.png");
        assert!(csp.contains("img-src 'self';"));
    }
}

//! HTTP middleware stack for storefront.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, transactions)
//! 2. `TraceLayer` (request span from [`http_trace_span`])
//! 3. Request ID (fill the span's `request_id`, echo the header)
//! 4. Security headers (CSP, frame and sniffing protection, cache policy)

pub mod request_id;
pub mod security_headers;

pub use request_id::{http_trace_span, request_id_middleware};
pub use security_headers::security_headers_middleware;

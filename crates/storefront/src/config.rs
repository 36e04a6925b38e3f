//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional.
//! - `STOREFRONT_HOST` - Bind address (default: 127.0.0.1)
//! - `STOREFRONT_PORT` - Listen port (default: 3000)
//! - `STOREFRONT_DEFAULT_SORT` - Initial catalog order: none, ascending or descending
//!   (default: descending)
//! - `STOREFRONT_STATIC_DIR` - Static asset directory (default: crates/storefront/static)
//! - `STOREFRONT_IMAGE_DIR` - Product image directory (default: crates/storefront/static/images)
//! - `STOREFRONT_PLACEHOLDER_IMAGE_URL` - Image shown when a product image is missing
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment name
//! - `SENTRY_SAMPLE_RATE` - Error event sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 1.0)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use deskgear_core::SortMode;
use thiserror::Error;
use url::Url;

/// Placeholder used when a product image cannot be served.
pub const DEFAULT_PLACEHOLDER_IMAGE_URL: &str = "https://via.placeholder.com/250x150?text=Image";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Catalog order used when a request does not pick one
    pub default_sort: SortMode,
    /// Directory served under `/static`
    pub static_dir: PathBuf,
    /// Directory served under `/images`
    pub image_dir: PathBuf,
    /// Redirect target for product images that do not exist
    pub placeholder_image_url: String,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
    /// Sentry environment name (e.g. production, staging)
    pub sentry_environment: Option<String>,
    /// Fraction of error events sent to Sentry
    pub sentry_sample_rate: f32,
    /// Fraction of transactions sent to Sentry
    pub sentry_traces_sample_rate: f32,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            default_sort: SortMode::Descending,
            static_dir: PathBuf::from("crates/storefront/static"),
            image_dir: PathBuf::from("crates/storefront/static/images"),
            placeholder_image_url: DEFAULT_PLACEHOLDER_IMAGE_URL.to_string(),
            sentry_dsn: None,
            sentry_environment: None,
            sentry_sample_rate: 1.0,
            sentry_traces_sample_rate: 1.0,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to a value that cannot be
    /// parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let host = parse_env("STOREFRONT_HOST", defaults.host)?;
        let port = parse_env("STOREFRONT_PORT", defaults.port)?;
        let default_sort = parse_env("STOREFRONT_DEFAULT_SORT", defaults.default_sort)?;
        let static_dir = get_optional_env("STOREFRONT_STATIC_DIR")
            .map_or(defaults.static_dir, PathBuf::from);
        let image_dir =
            get_optional_env("STOREFRONT_IMAGE_DIR").map_or(defaults.image_dir, PathBuf::from);
        let placeholder_image_url = get_optional_env("STOREFRONT_PLACEHOLDER_IMAGE_URL")
            .map_or(Ok(defaults.placeholder_image_url), |value| {
                parse_value::<Url>("STOREFRONT_PLACEHOLDER_IMAGE_URL", &value)
                    .map(String::from)
            })?;

        let sentry_dsn = get_optional_env("SENTRY_DSN");
        let sentry_environment = get_optional_env("SENTRY_ENVIRONMENT");
        let sentry_sample_rate = get_optional_env("SENTRY_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sentry_sample_rate);
        let sentry_traces_sample_rate = get_optional_env("SENTRY_TRACES_SAMPLE_RATE")
            .and_then(|s| s.parse().ok())
            .unwrap_or(defaults.sentry_traces_sample_rate);

        Ok(Self {
            host,
            port,
            default_sort,
            static_dir,
            image_dir,
            placeholder_image_url,
            sentry_dsn,
            sentry_environment,
            sentry_sample_rate,
            sentry_traces_sample_rate,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Parse an environment variable, falling back to `default` when unset.
fn parse_env<T>(key: &str, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    get_optional_env(key).map_or(Ok(default), |value| parse_value(key, &value))
}

fn parse_value<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse::<T>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StorefrontConfig::default();
        assert_eq!(config.default_sort, SortMode::Descending);
        assert_eq!(config.port, 3000);
        assert_eq!(config.placeholder_image_url, DEFAULT_PLACEHOLDER_IMAGE_URL);
        assert!(Url::parse(&config.placeholder_image_url).is_ok());
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            host: "0.0.0.0".parse().unwrap(),
            port: 8080,
            ..StorefrontConfig::default()
        };

        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "0.0.0.0");
        assert_eq!(addr.port(), 8080);
    }

    #[test]
    fn test_parse_value_sort_mode() {
        let mode: SortMode = parse_value("STOREFRONT_DEFAULT_SORT", "ascending").unwrap();
        assert_eq!(mode, SortMode::Ascending);
    }

    #[test]
    fn test_parse_value_invalid_sort_mode() {
        let err = parse_value::<SortMode>("STOREFRONT_DEFAULT_SORT", "random").unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidEnvVar(ref key, _) if key == "STOREFRONT_DEFAULT_SORT"
        ));
    }

    #[test]
    fn test_parse_value_invalid_port() {
        let err = parse_value::<u16>("STOREFRONT_PORT", "70000").unwrap_err();
        assert!(err.to_string().starts_with("Invalid environment variable STOREFRONT_PORT"));
    }

    #[test]
    fn test_parse_value_placeholder_url() {
        let url: Url =
            parse_value("STOREFRONT_PLACEHOLDER_IMAGE_URL", "https://img.example.com/x.png")
                .unwrap();
        assert_eq!(url.host_str(), Some("img.example.com"));
        assert!(parse_value::<Url>("STOREFRONT_PLACEHOLDER_IMAGE_URL", "not a url").is_err());
    }
}

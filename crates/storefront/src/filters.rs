//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

/// Returns the stylesheet URL, content-hashed when the build produced a hash.
///
/// The input is the stylesheet base name, e.g. `"main"`.
///
/// Usage in templates: `{{ "main"|stylesheet }}`
#[askama::filter_fn]
pub fn stylesheet(name: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(stylesheet_path(&name.to_string(), env!("CSS_HASH")))
}

/// Formats a unit count for the cart badge, e.g. `1 item`, `3 items`.
///
/// Usage in templates: `{{ cart.item_count|items }}`
#[askama::filter_fn]
pub fn items(count: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(item_label(&count.to_string()))
}

fn stylesheet_path(name: &str, hash: &str) -> String {
    if hash.is_empty() {
        format!("/static/css/{name}.css")
    } else {
        format!("/static/css/derived/{name}.{hash}.css")
    }
}

fn item_label(count: &str) -> String {
    let noun = if count == "1" { "item" } else { "items" };
    format!("{count} {noun}")
}

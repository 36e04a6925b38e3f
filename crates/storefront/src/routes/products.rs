//! Product list route handlers.

use askama::Template;
use axum::{
    extract::{Query, State},
    http::HeaderValue,
    response::{Html, IntoResponse, Response},
};
use tracing::instrument;

use super::SortQuery;
use crate::error::Result;
use crate::state::AppState;
use crate::views::{self, CatalogView};

/// Product list fragment template (for HTMX).
#[derive(Template)]
#[template(path = "partials/product_list.html")]
pub struct ProductListTemplate {
    pub catalog: CatalogView,
}

/// Re-render the product list for the selected sort mode (HTMX).
///
/// Never touches the cart. The page URL is updated so a reload keeps the
/// chosen order.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Response> {
    let sort = query.mode_or(state.config().default_sort)?;
    let catalog = views::render_catalog(&state.catalog().sorted(sort), sort);
    tracing::debug!(%sort, products = catalog.cards.len(), "Rendered product list");

    let html = ProductListTemplate { catalog }.render()?;
    let mut response = Html(html).into_response();
    if let Ok(url) = HeaderValue::from_str(&format!("/?sort={sort}")) {
        response.headers_mut().insert("hx-push-url", url);
    }

    Ok(response)
}

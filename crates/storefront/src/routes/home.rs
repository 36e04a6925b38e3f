//! Catalog page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Query, State};
use tracing::instrument;

use super::SortQuery;
use crate::error::Result;
use crate::filters;
use crate::state::AppState;
use crate::views::{self, CartView, CatalogView};

/// Catalog page template.
#[derive(Template, WebTemplate)]
#[template(path = "index.html")]
pub struct IndexTemplate {
    pub catalog: CatalogView,
    pub cart: CartView,
}

/// Display the catalog page with the cart sidebar.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<IndexTemplate> {
    let sort = query.mode_or(state.config().default_sort)?;
    let catalog = views::render_catalog(&state.catalog().sorted(sort), sort);
    let cart = views::render_cart(&*state.cart().read().await, sort);

    Ok(IndexTemplate { catalog, cart })
}

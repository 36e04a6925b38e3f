//! Cart route handlers.
//!
//! Cart operations use HTMX for dynamic updates without full page reloads.
//! Every mutation re-renders the whole cart region. Without HTMX the forms
//! post normally and the handler redirects back to the catalog page.

use askama::Template;
use axum::{
    Form,
    extract::{Query, State, rejection::FormRejection},
    http::HeaderMap,
    response::{AppendHeaders, Html, IntoResponse, Redirect, Response},
};
use deskgear_core::{ProductId, SortMode};
use serde::Deserialize;
use tracing::instrument;

use super::{SortQuery, is_htmx};
use crate::error::{Result, cart_breadcrumb};
use crate::filters;
use crate::state::AppState;
use crate::views::{self, CartView};

/// Add to cart / remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct CartActionForm {
    pub product_id: ProductId,
    /// Sort mode of the page the form was posted from, used for the
    /// non-HTMX redirect.
    pub sort: Option<String>,
}

impl CartActionForm {
    /// The posting page's sort mode, if it sent a valid one.
    fn sort_mode(&self) -> Option<SortMode> {
        self.sort.as_deref().and_then(|s| s.parse().ok())
    }

    fn return_to(&self) -> String {
        self.sort_mode()
            .map_or_else(|| "/".to_string(), |sort| format!("/?sort={sort}"))
    }
}

/// Cart region fragment template (for HTMX).
#[derive(Template)]
#[template(path = "partials/cart.html")]
pub struct CartTemplate {
    pub cart: CartView,
}

/// Display the cart region for a page shown in `?sort=` order.
#[instrument(skip(state))]
pub async fn show(
    State(state): State<AppState>,
    Query(query): Query<SortQuery>,
) -> Result<Html<String>> {
    let sort = query.mode_or(state.config().default_sort)?;
    let cart = views::render_cart(&*state.cart().read().await, sort);
    Ok(Html(CartTemplate { cart }.render()?))
}

/// Add one unit of a product to the cart.
///
/// Unknown product ids leave the cart unchanged. A form that does not
/// decode is a bad request.
#[instrument(skip(state, headers))]
pub async fn add(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<CartActionForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form?;
    let sort = form.sort_mode().unwrap_or(state.config().default_sort);
    let view = {
        let mut cart = state.cart().write().await;
        if cart.add(state.catalog(), form.product_id) {
            cart_breadcrumb("Added to cart", form.product_id, cart.len());
            tracing::info!(product_id = %form.product_id, items = cart.len(), "Added to cart");
        } else {
            tracing::debug!(product_id = %form.product_id, "Ignoring add for unknown product");
        }
        views::render_cart(&cart, sort)
    };

    cart_response(&headers, &form, view)
}

/// Remove one unit of a product from the cart.
///
/// Products not in the cart leave it unchanged.
#[instrument(skip(state, headers))]
pub async fn remove(
    State(state): State<AppState>,
    headers: HeaderMap,
    form: std::result::Result<Form<CartActionForm>, FormRejection>,
) -> Result<Response> {
    let Form(form) = form?;
    let sort = form.sort_mode().unwrap_or(state.config().default_sort);
    let view = {
        let mut cart = state.cart().write().await;
        if cart.remove_one(form.product_id) {
            cart_breadcrumb("Removed from cart", form.product_id, cart.len());
            tracing::info!(product_id = %form.product_id, items = cart.len(), "Removed from cart");
        } else {
            tracing::debug!(product_id = %form.product_id, "Ignoring remove for product not in cart");
        }
        views::render_cart(&cart, sort)
    };

    cart_response(&headers, &form, view)
}

/// Respond to a cart mutation.
///
/// HTMX requests get the re-rendered cart region and a `cart-updated`
/// trigger; plain form posts are redirected back to the catalog page.
fn cart_response(headers: &HeaderMap, form: &CartActionForm, cart: CartView) -> Result<Response> {
    if !is_htmx(headers) {
        return Ok(Redirect::to(&form.return_to()).into_response());
    }

    let html = CartTemplate { cart }.render()?;
    Ok((AppendHeaders([("HX-Trigger", "cart-updated")]), Html(html)).into_response())
}

//! Deskgear storefront library.
//!
//! A single-page catalog with a sort control and a cart sidebar. Pages are
//! rendered on the server; HTMX swaps the product list and cart regions in
//! place. The crate is a library so the router can be driven from tests.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filters;
pub mod middleware;
pub mod routes;
pub mod state;
pub mod views;

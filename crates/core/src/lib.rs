//! Deskgear Core - Shared types library.
//!
//! This crate provides the domain types used by the storefront:
//! - `storefront` - Server-rendered catalog page with an in-memory cart
//! - `integration-tests` - Router-level tests against the storefront library
//!
//! # Architecture
//!
//! The core crate contains only types and traits - no I/O, no HTTP, no
//! templates. This keeps it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for type-safe IDs, prices, products, and sort modes

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;

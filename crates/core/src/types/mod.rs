//! Core types for Deskgear.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod price;
pub mod product;
pub mod sort;

pub use id::*;
pub use price::{CurrencyCode, Price};
pub use product::Product;
pub use sort::{InvalidSortMode, SortMode};

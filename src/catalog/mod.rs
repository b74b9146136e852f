//! Catalog domain: products, the filtering engine and the basket.
//!
//! Everything here is synchronous and infallible. Fetching lives in
//! [`crate::source`], state transitions in [`crate::ui::catalog`].

mod basket;
mod filter;
mod product;

pub use basket::{Basket, StockPolicy};
pub use filter::{categories, compute_visible, CategorySelection, FilterState, ALL_CATEGORIES};
pub use product::{Product, ProductPage};

//! Intents for the catalog page.

use crate::catalog::{CategorySelection, Product};
use crate::ui::mvi::Intent;

#[derive(Debug, Clone)]
pub enum CatalogIntent {
    /// Product source answered with a list.
    Loaded { products: Vec<Product> },

    /// Product source failed. Terminal for the page.
    LoadFailed { message: String },

    /// Category control changed.
    SelectCategory(CategorySelection),

    /// Search control reported its full current text.
    SetQuery(String),

    /// Append a product to the basket.
    AddToBasket(Product),

    /// Move the list cursor by `n` rows (negative = up).
    MoveSelection(isize),
}

impl Intent for CatalogIntent {}

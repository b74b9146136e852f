//! Filtering engine for the catalog page.
//!
//! The derived view is a pure function of the raw product list and the
//! current [`FilterState`]. It is recomputed from scratch on every change
//! and never patched incrementally.

use super::product::Product;

/// Label used for the "no category filter" option.
pub const ALL_CATEGORIES: &str = "all";

/// Category criterion of the filter state.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategorySelection {
    #[default]
    All,
    /// Exact, case-sensitive category label.
    Only(String),
}

impl CategorySelection {
    /// Parse a control value: the literal `"all"` or a category label.
    pub fn from_label(label: &str) -> Self {
        if label == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Only(label.to_string())
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Only(category) => category,
        }
    }

    pub fn matches(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Only(category) => product.category == *category,
        }
    }

    /// Step through `["all", categories...]` by `step`, wrapping at both ends.
    ///
    /// A selection that is not among the offered options restarts from "all".
    pub fn cycle(&self, categories: &[String], step: isize) -> Self {
        let options = categories.len() as isize + 1;
        let current = match self {
            Self::All => 0,
            Self::Only(label) => categories
                .iter()
                .position(|c| c == label)
                .map(|idx| idx as isize + 1)
                .unwrap_or(0),
        };
        match (current + step).rem_euclid(options) {
            0 => Self::All,
            idx => Self::from_label(&categories[idx as usize - 1]),
        }
    }
}

/// The user's current view criteria.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FilterState {
    pub category: CategorySelection,
    /// Free-text title query, kept verbatim (never trimmed).
    pub query: String,
}

impl FilterState {
    pub fn apply(&self, products: Option<&[Product]>) -> Vec<Product> {
        compute_visible(products, &self.category, &self.query)
    }
}

/// Derive the visible products for a category and search query.
///
/// Absent input yields an empty list. Relative order is preserved.
pub fn compute_visible(
    products: Option<&[Product]>,
    category: &CategorySelection,
    query: &str,
) -> Vec<Product> {
    let Some(products) = products else {
        return Vec::new();
    };

    let needle = query.to_lowercase();
    products
        .iter()
        .filter(|product| category.matches(product))
        .filter(|product| needle.is_empty() || product.title.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// Distinct category labels in first-seen order.
///
/// A raw category spelled like [`ALL_CATEGORIES`] is left out: the implicit
/// "all" option already stands for it.
pub fn categories(products: &[Product]) -> Vec<String> {
    let mut seen: Vec<String> = Vec::new();
    for product in products {
        if product.category != ALL_CATEGORIES && !seen.iter().any(|c| *c == product.category) {
            seen.push(product.category.clone());
        }
    }
    seen
}

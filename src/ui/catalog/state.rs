use crate::catalog::{categories, Basket, CategorySelection, FilterState, Product};
use crate::ui::mvi::UiState;

/// Page state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CatalogState {
    /// Waiting for the product source. No controls are shown.
    #[default]
    Loading,

    /// Product source failed. Nothing else is reachable.
    Error { message: String },

    /// Products are available.
    Ready(CatalogView),
}

impl UiState for CatalogState {}

impl CatalogState {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error { .. })
    }

    pub fn view(&self) -> Option<&CatalogView> {
        match self {
            Self::Ready(view) => Some(view),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }
}

/// Everything the ready page renders.
///
/// Fields are private: the derived view is refreshed after every filter
/// change, so readers can never observe a stale `visible` list.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CatalogView {
    products: Vec<Product>,
    categories: Vec<String>,
    filter: FilterState,
    visible: Vec<Product>,
    selected: usize,
    basket: Basket,
}

impl CatalogView {
    /// Fresh view: filter `{all, ""}`, empty basket.
    pub fn new(products: Vec<Product>) -> Self {
        let mut view = Self {
            categories: categories(&products),
            products,
            ..Self::default()
        };
        view.refresh();
        view
    }

    /// Distinct category labels of the raw list, first-seen order.
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn visible(&self) -> &[Product] {
        &self.visible
    }

    /// Number of products in the derived view.
    pub fn item_count(&self) -> usize {
        self.visible.len()
    }

    pub fn selected_index(&self) -> Option<usize> {
        (!self.visible.is_empty()).then_some(self.selected)
    }

    pub fn selected_product(&self) -> Option<&Product> {
        self.visible.get(self.selected)
    }

    pub fn basket(&self) -> &Basket {
        &self.basket
    }

    pub(super) fn set_category(&mut self, category: CategorySelection) {
        self.filter.category = category;
        self.refresh();
    }

    pub(super) fn set_query(&mut self, query: String) {
        self.filter.query = query;
        self.refresh();
    }

    pub(super) fn add_to_basket(&mut self, product: Product) {
        self.basket.add(product);
    }

    pub(super) fn move_selection(&mut self, delta: isize) {
        let last = self.visible.len().saturating_sub(1);
        self.selected = self.selected.saturating_add_signed(delta).min(last);
    }

    fn refresh(&mut self) {
        self.visible = self.filter.apply(Some(&self.products));
        self.selected = self.selected.min(self.visible.len().saturating_sub(1));
    }
}

use std::sync::mpsc;
use std::sync::Arc;

use tokio::runtime::Handle;

use crate::catalog::{Product, StockPolicy};
use crate::source::{spawn_fetch, FetchHandle, ProductSource, SourceError};
use crate::ui::catalog::{CatalogIntent, CatalogReducer, CatalogState, CatalogView};
use crate::ui::events::AppEvent;
use crate::ui::mvi::Reducer;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Focus {
    /// Product list has the keyboard.
    List,
    /// Search box is being edited.
    Search,
    /// Basket popup is open.
    Basket,
}

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Page controller: owns the catalog state and the in-flight fetch.
pub struct App {
    should_quit: bool,
    focus: Focus,
    /// Page state (MVI pattern).
    catalog: CatalogState,
    stock_policy: StockPolicy,
    /// Bumped on every fetch; results carrying an older value are dropped.
    fetch_generation: u64,
    /// Fetch task (resource, managed outside MVI). Aborted on drop.
    fetch: Option<FetchHandle>,
    /// One-line feedback shown in the footer.
    notice: Option<String>,
}

impl App {
    pub fn new(stock_policy: StockPolicy) -> Self {
        Self {
            should_quit: false,
            focus: Focus::List,
            catalog: CatalogState::default(),
            stock_policy,
            fetch_generation: 0,
            fetch: None,
            notice: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    pub fn catalog(&self) -> &CatalogState {
        &self.catalog
    }

    pub fn view(&self) -> Option<&CatalogView> {
        self.catalog.view()
    }

    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    pub fn is_fetching(&self) -> bool {
        self.fetch.as_ref().is_some_and(|fetch| !fetch.is_finished())
    }

    /// Start fetching products on `runtime`; the outcome arrives on `events`
    /// as [`AppEvent::ProductsFetched`]. Replaces any fetch in flight.
    pub fn start_fetch(
        &mut self,
        runtime: &Handle,
        source: Arc<dyn ProductSource>,
        events: mpsc::Sender<AppEvent>,
    ) -> u64 {
        let generation = self.next_fetch_generation();
        tracing::info!(generation, source = source.name(), "Starting product fetch");

        self.fetch = Some(spawn_fetch(runtime, source, move |result| {
            if events
                .send(AppEvent::ProductsFetched { generation, result })
                .is_err()
            {
                tracing::trace!("Fetch result dropped (event loop gone)");
            }
        }));
        generation
    }

    /// Claim the tag for a new fetch. Generation 0 means "never fetched".
    pub(crate) fn next_fetch_generation(&mut self) -> u64 {
        self.fetch_generation += 1;
        self.fetch_generation
    }

    /// Apply a fetch outcome. Results from superseded fetches, or arriving
    /// before any fetch was started, are ignored.
    pub fn on_products_fetched(
        &mut self,
        generation: u64,
        result: Result<Vec<Product>, SourceError>,
    ) {
        if generation == 0 || generation != self.fetch_generation {
            tracing::debug!(
                generation,
                current = self.fetch_generation,
                "Ignoring stale fetch result"
            );
            return;
        }
        self.fetch = None;

        match result {
            Ok(products) => self.dispatch(CatalogIntent::Loaded { products }),
            Err(err) => self.dispatch(CatalogIntent::LoadFailed {
                message: err.to_string(),
            }),
        }
    }

    /// Step the category control through `["all", categories...]`.
    pub fn cycle_category(&mut self, step: isize) {
        let Some(view) = self.catalog.view() else {
            return;
        };
        let next = view.filter().category.cycle(view.categories(), step);
        self.dispatch(CatalogIntent::SelectCategory(next));
    }

    /// Report the full search text verbatim.
    pub fn set_query(&mut self, query: String) {
        self.dispatch(CatalogIntent::SetQuery(query));
    }

    pub fn push_query_char(&mut self, ch: char) {
        if let Some(mut query) = self.current_query() {
            query.push(ch);
            self.set_query(query);
        }
    }

    pub fn pop_query_char(&mut self) {
        if let Some(mut query) = self.current_query() {
            if query.pop().is_some() {
                self.set_query(query);
            }
        }
    }

    pub fn clear_query(&mut self) {
        if self.current_query().is_some_and(|q| !q.is_empty()) {
            self.set_query(String::new());
        }
    }

    pub fn move_selection(&mut self, delta: isize) {
        self.dispatch(CatalogIntent::MoveSelection(delta));
    }

    /// Add the product under the cursor to the basket.
    pub fn add_selected_to_basket(&mut self) -> bool {
        let Some(product) = self.view().and_then(|v| v.selected_product()).cloned() else {
            return false;
        };
        self.add_to_basket(product)
    }

    /// Add `product` to the basket if the stock policy permits it.
    pub fn add_to_basket(&mut self, product: Product) -> bool {
        if self.catalog.view().is_none() {
            return false;
        }
        if !self.stock_policy.permits(&product) {
            tracing::info!(product_id = product.id, "Refused out-of-stock product");
            self.notice = Some(format!("\"{}\" is out of stock", product.title));
            return false;
        }

        tracing::debug!(product_id = product.id, "Adding product to basket");
        self.notice = Some(format!("Added \"{}\" to basket", product.title));
        self.dispatch(CatalogIntent::AddToBasket(product));
        true
    }

    pub fn focus_search(&mut self) {
        if self.catalog.view().is_some() {
            self.focus = Focus::Search;
        }
    }

    pub fn focus_list(&mut self) {
        self.focus = Focus::List;
    }

    /// Open or close the basket popup. Returns true if now open.
    pub fn toggle_basket(&mut self) -> bool {
        self.focus = match self.focus {
            Focus::Basket => Focus::List,
            _ if self.catalog.view().is_some() => Focus::Basket,
            other => other,
        };
        self.focus == Focus::Basket
    }

    fn current_query(&self) -> Option<String> {
        self.catalog.view().map(|view| view.filter().query.clone())
    }

    fn dispatch(&mut self, intent: CatalogIntent) {
        dispatch_mvi!(self, catalog, CatalogReducer, intent);
    }
}

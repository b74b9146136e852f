//! Reducer for the catalog page.

use crate::ui::mvi::Reducer;

use super::intent::CatalogIntent;
use super::state::{CatalogState, CatalogView};

/// Pure transitions of the page state machine.
///
/// Stock policy checks and logging happen in the caller before
/// `AddToBasket` is dispatched.
pub struct CatalogReducer;

impl Reducer for CatalogReducer {
    type State = CatalogState;
    type Intent = CatalogIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match (state, intent) {
            (CatalogState::Loading, CatalogIntent::Loaded { products }) => {
                CatalogState::Ready(CatalogView::new(products))
            }
            (CatalogState::Loading, CatalogIntent::LoadFailed { message }) => {
                CatalogState::Error { message }
            }
            (CatalogState::Ready(mut view), intent) => {
                match intent {
                    CatalogIntent::SelectCategory(category) => view.set_category(category),
                    CatalogIntent::SetQuery(query) => view.set_query(query),
                    CatalogIntent::AddToBasket(product) => view.add_to_basket(product),
                    CatalogIntent::MoveSelection(delta) => view.move_selection(delta),
                    // A second fetch outcome never replaces a ready page.
                    CatalogIntent::Loaded { .. } | CatalogIntent::LoadFailed { .. } => {}
                }
                CatalogState::Ready(view)
            }
            // Error is terminal; controls are unreachable while loading.
            (other, _) => other,
        }
    }
}

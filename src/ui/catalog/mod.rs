//! Catalog page feature module.
//!
//! State machine of the page: `Loading → Ready | Error`. Inside `Ready`
//! the filter criteria, derived view, list cursor and basket change only
//! through [`CatalogReducer`].
//!
//! - `state.rs` - `CatalogState` and the `CatalogView` it holds when ready
//! - `intent.rs` - control events and fetch outcomes
//! - `reducer.rs` - transitions (pure, no side effects)

mod intent;
mod reducer;
mod state;

pub use intent::CatalogIntent;
pub use reducer::CatalogReducer;
pub use state::{CatalogState, CatalogView};

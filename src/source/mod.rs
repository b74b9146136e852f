//! Product sources: where the raw catalog comes from.

mod error;
mod fetch;
mod http;
mod static_source;

use async_trait::async_trait;

use crate::catalog::Product;

pub use error::SourceError;
pub use fetch::{spawn_fetch, FetchHandle};
pub use http::{decode_products, HttpProductSource};
pub use static_source::StaticProductSource;

/// Supplier of the raw product list.
///
/// A fetch either yields the whole list or fails; there is no partial
/// result and no retry at this level.
#[async_trait]
pub trait ProductSource: Send + Sync {
    /// Returns the name of this source for logging.
    fn name(&self) -> &'static str;

    /// Fetch the product list.
    async fn fetch(&self) -> Result<Vec<Product>, SourceError>;
}

use std::time::Duration;

use async_trait::async_trait;

use crate::catalog::Product;
use crate::source::error::SourceError;
use crate::source::http::decode_products;
use crate::source::ProductSource;

const SAMPLE_PRODUCTS: &str = include_str!("../../assets/sample_products.json");

/// In-memory product source.
///
/// Serves a fixed outcome, optionally after a delay. Used for `--offline`
/// runs and as a stand-in source in tests.
pub struct StaticProductSource {
    outcome: Result<Vec<Product>, String>,
    delay: Duration,
}

impl StaticProductSource {
    pub fn new(products: Vec<Product>) -> Self {
        Self {
            outcome: Ok(products),
            delay: Duration::ZERO,
        }
    }

    /// Source whose every fetch fails with `reason`.
    pub fn failing(reason: impl Into<String>) -> Self {
        Self {
            outcome: Err(reason.into()),
            delay: Duration::ZERO,
        }
    }

    /// Source backed by the bundled sample catalog.
    pub fn sample() -> Result<Self, SourceError> {
        Ok(Self::new(decode_products(SAMPLE_PRODUCTS.as_bytes())?))
    }

    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }
}

#[async_trait]
impl ProductSource for StaticProductSource {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        match &self.outcome {
            Ok(products) => Ok(products.clone()),
            Err(reason) => Err(SourceError::Unavailable {
                reason: reason.clone(),
            }),
        }
    }
}

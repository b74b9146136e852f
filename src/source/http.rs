use std::collections::HashSet;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;

use crate::catalog::{Product, ProductPage};
use crate::config::SourceConfig;
use crate::source::error::SourceError;
use crate::source::ProductSource;

/// Fetches the product list from a dummyjson-compatible HTTP API.
pub struct HttpProductSource {
    client: Client,
    base_url: String,
    limit: u32,
    request_timeout: Duration,
}

impl HttpProductSource {
    pub fn new(config: &SourceConfig) -> Result<Self, SourceError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(config.connect_timeout_seconds as u64))
            .build()
            .map_err(SourceError::Client)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            limit: config.limit,
            request_timeout: Duration::from_secs(config.timeout_seconds as u64),
        })
    }

    /// Full URL of the product listing request.
    pub fn products_url(&self) -> String {
        format!("{}/products?limit={}", self.base_url, self.limit)
    }

    async fn do_fetch(&self, url: String) -> Result<Vec<Product>, SourceError> {
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| SourceError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(SourceError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| SourceError::Transport {
                url: url.clone(),
                source: e,
            })?;

        decode_products(&body)
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    fn name(&self) -> &'static str {
        "http"
    }

    async fn fetch(&self) -> Result<Vec<Product>, SourceError> {
        let url = self.products_url();
        tracing::debug!("Fetching products from {}", url);

        match timeout(self.request_timeout, self.do_fetch(url)).await {
            Ok(result) => result,
            Err(_) => Err(SourceError::Timeout {
                seconds: self.request_timeout.as_secs(),
            }),
        }
    }
}

/// Decode a product page and enforce identifier uniqueness.
pub fn decode_products(body: &[u8]) -> Result<Vec<Product>, SourceError> {
    let page: ProductPage = serde_json::from_slice(body)?;

    let mut seen = HashSet::with_capacity(page.products.len());
    for product in &page.products {
        if !seen.insert(product.id) {
            return Err(SourceError::DuplicateId { id: product.id });
        }
    }

    Ok(page.products)
}

use std::sync::Arc;

use tokio::runtime::Handle;
use tokio::task::JoinHandle;

use crate::catalog::Product;
use crate::source::error::SourceError;
use crate::source::ProductSource;

/// In-flight product fetch.
///
/// Dropping the handle aborts the task, so a torn-down page never
/// receives a late result.
pub struct FetchHandle {
    task: JoinHandle<()>,
}

impl FetchHandle {
    pub fn is_finished(&self) -> bool {
        self.task.is_finished()
    }
}

impl Drop for FetchHandle {
    fn drop(&mut self) {
        self.task.abort();
    }
}

/// Run `source.fetch()` on `runtime` and hand the outcome to `on_done`.
pub fn spawn_fetch<F>(runtime: &Handle, source: Arc<dyn ProductSource>, on_done: F) -> FetchHandle
where
    F: FnOnce(Result<Vec<Product>, SourceError>) + Send + 'static,
{
    let task = runtime.spawn(async move {
        let result = source.fetch().await;
        match &result {
            Ok(products) => tracing::info!(
                source = source.name(),
                count = products.len(),
                "Product fetch succeeded"
            ),
            Err(err) => tracing::error!(
                source = source.name(),
                kind = err.kind(),
                "Product fetch failed: {}",
                err
            ),
        }
        on_done(result);
    });

    FetchHandle { task }
}

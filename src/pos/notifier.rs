use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::AppError;

/// A dependent read view that must re-read its data after a committed sale.
/// `refresh` may hit the ledger itself; its errors are isolated by the
/// notifier and never escalate past it.
#[async_trait]
pub trait SaleObserver: Send + Sync {
    fn name(&self) -> &str;
    async fn refresh(&self) -> Result<(), AppError>;
}

#[derive(Clone, Default)]
pub struct ViewNotifier {
    observers: Arc<RwLock<Vec<Arc<dyn SaleObserver>>>>,
}

impl ViewNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn register(&self, observer: Arc<dyn SaleObserver>) {
        self.observers.write().await.push(observer);
    }

    /// Fan refreshes out to every registered view. Called by the queue worker
    /// only after a successful commit. A failing observer is logged and
    /// skipped; the others still run and the sale stays committed.
    pub async fn notify_after_commit(&self) {
        let observers = self.observers.read().await.clone();

        for observer in observers {
            if let Err(e) = observer.refresh().await {
                tracing::warn!(
                    observer = observer.name(),
                    error = %e,
                    "View refresh failed after committed sale"
                );
            }
        }
    }
}

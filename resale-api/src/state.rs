use std::sync::{Arc, Mutex, PoisonError};
use resale_order::{OrderManager, SummaryTemplate};

use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    /// Single mutator: every request takes this lock for its whole state change.
    pub manager: Arc<Mutex<OrderManager>>,
    pub summary: Arc<SummaryTemplate>,
}

impl AppState {
    pub fn new(manager: OrderManager, summary: SummaryTemplate) -> Self {
        Self {
            manager: Arc::new(Mutex::new(manager)),
            summary: Arc::new(summary),
        }
    }

    /// Runs `f` against the order book on the blocking pool, where the lock is held
    /// and mutations persist through the blob store.
    ///
    /// A task that panics maps to `InternalServerError`; later requests recover the lock.
    pub async fn with_manager<T, F>(&self, f: F) -> Result<T, AppError>
    where
        F: FnOnce(&mut OrderManager) -> T + Send + 'static,
        T: Send + 'static,
    {
        let manager = Arc::clone(&self.manager);
        tokio::task::spawn_blocking(move || {
            let mut guard = manager.lock().unwrap_or_else(PoisonError::into_inner);
            f(&mut guard)
        })
        .await
        .map_err(|e| AppError::InternalServerError(format!("Order book task failed: {}", e)))
    }
}

use std::sync::Arc;

use resale_catalog::{PriceBreakdown, PricingEngine, Settings};
use resale_core::{input, BlobStore, CoreError, ORDERS_KEY, SETTINGS_KEY};
use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::book::OrderBook;
use crate::models::{Order, OrderDraft, OrderId, OrderStatus, PaymentStatus};

/// Manages the order book and the payment → status coupling.
///
/// Every successful mutation is followed by a full overwrite of the affected
/// key in the injected store. Save failures are logged and never roll back the
/// in-memory change.
pub struct OrderManager {
    book: OrderBook,
    store: Arc<dyn BlobStore>,
}

impl OrderManager {
    pub fn new(book: OrderBook, store: Arc<dyn BlobStore>) -> Self {
        Self { book, store }
    }

    /// Restore the order book from `store`.
    ///
    /// Missing or unreadable blobs fall back to an empty collection and
    /// `default_settings`.
    pub fn load(store: Arc<dyn BlobStore>, default_settings: Settings) -> Self {
        let orders: Vec<Order> = load_blob(store.as_ref(), ORDERS_KEY).unwrap_or_default();
        let settings: Settings = load_blob(store.as_ref(), SETTINGS_KEY).unwrap_or(default_settings);

        info!(orders = orders.len(), "Order book loaded");
        Self::new(OrderBook::new(orders, settings), store)
    }

    pub fn book(&self) -> &OrderBook {
        &self.book
    }

    pub fn orders(&self) -> &[Order] {
        self.book.orders()
    }

    pub fn settings(&self) -> &Settings {
        self.book.settings()
    }

    pub fn get_order(&self, id: &OrderId) -> Option<&Order> {
        self.book.get(id)
    }

    /// Live preview against the current settings. Touches nothing.
    pub fn quote(&self, draft: &OrderDraft) -> PriceBreakdown {
        PricingEngine::compute(draft.original_price, draft.currency, draft.piece_category, self.settings())
    }

    /// Store a new order priced with `computed`, newest first.
    pub fn create_order(&mut self, mut draft: OrderDraft, computed: PriceBreakdown) -> Result<Order, OrderError> {
        draft.customer_name = input::require_customer_name(&draft.customer_name)?;

        let order = Order::new(draft, computed);
        info!(
            order_id = %order.id,
            currency = %order.currency,
            total = order.pricing.total,
            status = ?order.order_status,
            "Order created"
        );

        self.book.prepend(order.clone());
        self.persist_orders();
        Ok(order)
    }

    /// Price `draft` against the current settings and store it.
    pub fn place_order(&mut self, draft: OrderDraft) -> Result<Order, OrderError> {
        let computed = self.quote(&draft);
        self.create_order(draft, computed)
    }

    /// Any status may follow any other; no transition table is enforced.
    pub fn update_status(&mut self, id: &OrderId, status: OrderStatus) -> Result<Order, OrderError> {
        let order = self.get_order_mut(id)?;
        debug!(order_id = %id, from = ?order.order_status, to = ?status, "Order status updated");
        order.order_status = status;

        let updated = order.clone();
        self.persist_orders();
        Ok(updated)
    }

    pub fn update_payment_status(&mut self, id: &OrderId, payment: PaymentStatus) -> Result<Order, OrderError> {
        let order = self.get_order_mut(id)?;
        let prior = order.order_status;
        let next = prior.after_payment_change(payment);

        if payment == PaymentStatus::NotPaid && !matches!(prior, OrderStatus::AwaitingPayment | OrderStatus::Paid) {
            warn!(order_id = %id, from = ?prior, "Payment revoked, order moved back to awaiting payment");
        }

        order.payment_status = payment;
        order.order_status = next;
        debug!(order_id = %id, payment = ?payment, status = ?next, "Payment status updated");

        let updated = order.clone();
        self.persist_orders();
        Ok(updated)
    }

    pub fn delete_order(&mut self, id: &OrderId) -> Result<Order, OrderError> {
        let removed = self
            .book
            .remove(id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))?;

        info!(order_id = %id, "Order deleted");
        self.persist_orders();
        Ok(removed)
    }

    /// Replace settings wholesale. Existing orders keep their priced snapshot.
    pub fn update_settings(&mut self, settings: Settings) {
        info!(?settings, "Settings updated");
        self.book.replace_settings(settings);
        self.persist(SETTINGS_KEY, self.book.settings());
    }

    fn get_order_mut(&mut self, id: &OrderId) -> Result<&mut Order, OrderError> {
        self.book
            .get_mut(id)
            .ok_or_else(|| OrderError::NotFound(id.to_string()))
    }

    fn persist_orders(&self) {
        self.persist(ORDERS_KEY, self.book.orders());
    }

    fn persist<T: Serialize + ?Sized>(&self, key: &str, value: &T) {
        let blob = match serde_json::to_string(value) {
            Ok(blob) => blob,
            Err(e) => {
                warn!(key, error = %e, "Failed to serialize state for persistence");
                return;
            }
        };

        if let Err(e) = self.store.save(key, &blob) {
            warn!(key, error = %e, "Failed to persist state");
        }
    }
}

fn load_blob<T: DeserializeOwned>(store: &dyn BlobStore, key: &str) -> Option<T> {
    let blob = match store.load(key) {
        Ok(Some(blob)) => blob,
        Ok(None) => return None,
        Err(e) => {
            warn!(key, error = %e, "Failed to read stored state, starting empty");
            return None;
        }
    };

    match serde_json::from_str(&blob) {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(key, error = %e, "Stored state is corrupt, ignoring it");
            None
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum OrderError {
    #[error("Order not found: {0}")]
    NotFound(String),

    #[error(transparent)]
    Invalid(#[from] CoreError),
}

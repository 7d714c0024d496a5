use resale_catalog::Settings;

use crate::models::{Order, OrderId};

/// In-memory order collection (newest first) plus the current settings.
#[derive(Debug, Clone, Default)]
pub struct OrderBook {
    orders: Vec<Order>,
    settings: Settings,
}

impl OrderBook {
    pub fn new(orders: Vec<Order>, settings: Settings) -> Self {
        Self { orders, settings }
    }

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn get(&self, id: &OrderId) -> Option<&Order> {
        self.orders.iter().find(|order| &order.id == id)
    }

    pub(crate) fn get_mut(&mut self, id: &OrderId) -> Option<&mut Order> {
        self.orders.iter_mut().find(|order| &order.id == id)
    }

    pub(crate) fn prepend(&mut self, order: Order) {
        self.orders.insert(0, order);
    }

    pub(crate) fn remove(&mut self, id: &OrderId) -> Option<Order> {
        let index = self.orders.iter().position(|order| &order.id == id)?;
        Some(self.orders.remove(index))
    }

    pub(crate) fn replace_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    /// Orders whose customer name contains `query`, case-insensitively.
    pub fn search(&self, query: &str) -> Vec<&Order> {
        let needle = query.trim().to_lowercase();
        self.orders
            .iter()
            .filter(|order| needle.is_empty() || order.customer_name.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn recent(&self, limit: usize) -> &[Order] {
        &self.orders[..limit.min(self.orders.len())]
    }
}

use serde::Serialize;

use crate::models::{Order, OrderStatus};

/// Headline figures for the dashboard, all amounts in MZN.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardStats {
    /// Base cost collected on orders that reached `Paid` or later.
    pub received: f64,
    /// Margin still to be earned on open orders.
    pub pending: f64,
    /// Margin earned on delivered orders.
    pub profit: f64,
    /// Orders neither delivered nor cancelled.
    pub active: usize,
}

impl DashboardStats {
    pub fn from_orders(orders: &[Order]) -> Self {
        orders.iter().fold(Self::default(), |mut stats, order| {
            let status = order.order_status;

            if status.counts_as_received() {
                stats.received += order.pricing.base_cost;
            }
            if status.is_open() {
                stats.pending += order.pricing.margin;
                stats.active += 1;
            } else if status == OrderStatus::Delivered {
                stats.profit += order.pricing.margin;
            }
            stats
        })
    }
}

use resale_catalog::PriceBreakdown;
use resale_shared::format_mzn;
use serde::Deserialize;

use crate::models::{Order, PaymentStatus};

/// Fixed customer-facing message handed to the share/clipboard collaborator.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SummaryTemplate {
    pub business_name: String,
    pub delivery_window: String,
}

impl Default for SummaryTemplate {
    fn default() -> Self {
        Self {
            business_name: "Outfit Empire".to_string(),
            delivery_window: "14–19 dias úteis".to_string(),
        }
    }
}

impl SummaryTemplate {
    pub fn render(&self, order: &Order) -> String {
        self.render_breakdown(&order.pricing, order.payment_status)
    }

    /// Render a breakdown that is not stored yet, e.g. a live quote.
    pub fn render_breakdown(&self, pricing: &PriceBreakdown, payment: PaymentStatus) -> String {
        let paid = payment.amount_paid(pricing);
        let balance = pricing.total - paid;

        format!(
            "Pedido – {business} 🛍️\n\
             \n\
             Preço Base: {base}\n\
             Taxa ({rate}%): {margin}\n\
             Total: {total}\n\
             \n\
             Pago: {paid}\n\
             Saldo: {balance}\n\
             \n\
             Prazo: {window}",
            business = self.business_name,
            base = format_mzn(pricing.base_cost),
            rate = margin_rate(pricing),
            margin = format_mzn(pricing.margin),
            total = format_mzn(pricing.total),
            paid = format_mzn(paid),
            balance = format_mzn(balance),
            window = self.delivery_window,
        )
    }
}

/// Whole-percent margin implied by the snapshot itself.
fn margin_rate(pricing: &PriceBreakdown) -> u32 {
    if pricing.base_cost > 0.0 && pricing.margin > 0.0 {
        (pricing.margin / pricing.base_cost * 100.0).round() as u32
    } else {
        0
    }
}

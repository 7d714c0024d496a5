use serde::{Deserialize, Serialize};

use crate::settings::{Currency, PieceCategory, Settings};

/// Monetary breakdown of one priced item, all amounts in MZN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PriceBreakdown {
    pub converted_amount: f64,
    pub piece_fee: f64,
    /// Converted price plus the piece fee.
    pub base_cost: f64,
    pub margin: f64,
    /// Base cost plus margin: what the customer owes.
    pub total: f64,
}

/// Pricing engine bound to a settings snapshot.
///
/// Inputs are assumed already coerced to non-negative numbers; nothing here
/// validates or fails.
pub struct PricingEngine {
    settings: Settings,
}

impl PricingEngine {
    pub fn new(settings: Settings) -> Self {
        Self { settings }
    }

    /// Price an item against this engine's settings snapshot.
    pub fn quote(&self, original_price: f64, currency: Currency, category: PieceCategory) -> PriceBreakdown {
        Self::compute(original_price, currency, category, &self.settings)
    }

    pub fn compute(
        original_price: f64,
        currency: Currency,
        category: PieceCategory,
        settings: &Settings,
    ) -> PriceBreakdown {
        let converted_amount = original_price * settings.rate_for(currency);
        let piece_fee = settings.fee_for(category);
        let base_cost = converted_amount + piece_fee;
        let margin = base_cost * (settings.margin_percentage as f64 / 100.0);
        let total = base_cost + margin;

        PriceBreakdown {
            converted_amount,
            piece_fee,
            base_cost,
            margin,
            total,
        }
    }
}

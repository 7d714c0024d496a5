use resale_catalog::{Currency, PieceCategory, PriceBreakdown, Settings};
use resale_core::input;
use resale_order::{DashboardStats, Order, OrderStatus, PaymentStatus};
use serde::{Deserialize, Serialize};

/// A number as typed by the user: JSON number, text, or nothing.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    Number(f64),
    Text(String),
    #[default]
    Missing,
}

impl RawAmount {
    pub fn amount(&self) -> f64 {
        match self {
            RawAmount::Number(value) => input::sanitize_amount(*value),
            RawAmount::Text(raw) => input::coerce_amount(raw),
            RawAmount::Missing => 0.0,
        }
    }

    pub fn percentage(&self) -> u32 {
        match self {
            RawAmount::Number(value) => input::sanitize_amount(*value).round() as u32,
            RawAmount::Text(raw) => input::coerce_percentage(raw),
            RawAmount::Missing => 0,
        }
    }
}

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    #[serde(default)]
    pub customer_name: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub original_price: RawAmount,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub piece_category: PieceCategory,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    #[serde(default)]
    pub original_price: RawAmount,
    #[serde(default)]
    pub currency: Currency,
    #[serde(default)]
    pub piece_category: PieceCategory,
    #[serde(default)]
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    #[serde(flatten)]
    pub breakdown: PriceBreakdown,
    pub summary: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SettingsRequest {
    #[serde(default)]
    pub margin_percentage: RawAmount,
    #[serde(default)]
    pub light_piece_tax: RawAmount,
    #[serde(default)]
    pub heavy_piece_tax: RawAmount,
    #[serde(default)]
    pub zar_rate: RawAmount,
    #[serde(default)]
    pub usd_rate: RawAmount,
}

impl From<SettingsRequest> for Settings {
    fn from(req: SettingsRequest) -> Self {
        Self {
            margin_percentage: req.margin_percentage.percentage(),
            light_piece_tax: req.light_piece_tax.amount(),
            heavy_piece_tax: req.heavy_piece_tax.amount(),
            zar_rate: req.zar_rate.amount(),
            usd_rate: req.usd_rate.amount(),
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListOrdersQuery {
    pub q: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct UpdateStatusRequest {
    pub status: OrderStatus,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePaymentRequest {
    pub payment_status: PaymentStatus,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SummaryResponse {
    pub order_id: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    #[serde(flatten)]
    pub stats: DashboardStats,
    pub recent: Vec<Order>,
}

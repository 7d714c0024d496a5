use chrono::{DateTime, Utc};
use resale_catalog::{Currency, PieceCategory, PriceBreakdown};
use resale_shared::Masked;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Order status in the lifecycle, in the order a sale normally moves through.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    AwaitingPayment,
    Paid,
    Ordered,
    InTransit,
    Arrived,
    Delivered,
    Cancelled,
}

/// How much of the order the customer has paid.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    #[default]
    NotPaid,
    PaidBase,
    PaidTotal,
}

impl OrderStatus {
    pub const ALL: [OrderStatus; 7] = [
        OrderStatus::AwaitingPayment,
        OrderStatus::Paid,
        OrderStatus::Ordered,
        OrderStatus::InTransit,
        OrderStatus::Arrived,
        OrderStatus::Delivered,
        OrderStatus::Cancelled,
    ];

    /// Still being worked on: neither delivered nor cancelled.
    pub fn is_open(&self) -> bool {
        !matches!(self, OrderStatus::Delivered | OrderStatus::Cancelled)
    }

    /// Money has been received for this order (cancelled orders excluded).
    pub fn counts_as_received(&self) -> bool {
        matches!(
            self,
            OrderStatus::Paid
                | OrderStatus::Ordered
                | OrderStatus::InTransit
                | OrderStatus::Arrived
                | OrderStatus::Delivered
        )
    }

    /// Status that follows a payment edit.
    ///
    /// Revoking payment always lands on `AwaitingPayment`, whatever the current
    /// stage. A first payment advances `AwaitingPayment` to `Paid`. Any other
    /// combination keeps the current status.
    pub fn after_payment_change(self, payment: PaymentStatus) -> OrderStatus {
        match (payment, self) {
            (PaymentStatus::NotPaid, _) => OrderStatus::AwaitingPayment,
            (_, OrderStatus::AwaitingPayment) => OrderStatus::Paid,
            (_, current) => current,
        }
    }
}

impl PaymentStatus {
    /// Status a freshly created order starts in.
    pub fn initial_order_status(&self) -> OrderStatus {
        match self {
            PaymentStatus::NotPaid => OrderStatus::AwaitingPayment,
            PaymentStatus::PaidBase | PaymentStatus::PaidTotal => OrderStatus::Paid,
        }
    }

    /// Amount received so far for the given breakdown.
    pub fn amount_paid(&self, pricing: &PriceBreakdown) -> f64 {
        match self {
            PaymentStatus::PaidTotal => pricing.total,
            PaymentStatus::PaidBase => pricing.base_cost,
            PaymentStatus::NotPaid => 0.0,
        }
    }
}

/// Opaque order identifier.
///
/// New ids are UUIDs; ids of any other shape found in stored data are kept as-is.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(String);

impl OrderId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4().simple().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for OrderId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl fmt::Display for OrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Customer input for a new order, already coerced at the input boundary.
#[derive(Debug, Clone)]
pub struct OrderDraft {
    pub customer_name: String,
    pub phone: Masked<String>,
    pub original_price: f64,
    pub currency: Currency,
    pub piece_category: PieceCategory,
    pub payment_status: PaymentStatus,
}

impl OrderDraft {
    pub fn new(customer_name: impl Into<String>, original_price: f64) -> Self {
        Self {
            customer_name: customer_name.into(),
            phone: Masked::default(),
            original_price,
            currency: Currency::Zar,
            piece_category: PieceCategory::LightMedium,
            payment_status: PaymentStatus::NotPaid,
        }
    }

    pub fn currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn piece_category(mut self, category: PieceCategory) -> Self {
        self.piece_category = category;
        self
    }

    pub fn payment_status(mut self, payment: PaymentStatus) -> Self {
        self.payment_status = payment;
        self
    }

    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Masked(phone.into());
        self
    }
}

/// One customer transaction.
///
/// `pricing` is a snapshot taken at creation time and is never recomputed, so
/// later settings changes leave the agreed amounts alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: OrderId,
    pub customer_name: String,
    #[serde(default)]
    pub phone: Masked<String>,
    pub original_price: f64,
    pub currency: Currency,
    pub piece_category: PieceCategory,
    #[serde(flatten)]
    pub pricing: PriceBreakdown,
    pub payment_status: PaymentStatus,
    pub order_status: OrderStatus,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Order {
    pub fn new(draft: OrderDraft, pricing: PriceBreakdown) -> Self {
        Self {
            id: OrderId::generate(),
            customer_name: draft.customer_name,
            phone: draft.phone,
            original_price: draft.original_price,
            currency: draft.currency,
            piece_category: draft.piece_category,
            pricing,
            payment_status: draft.payment_status,
            order_status: draft.payment_status.initial_order_status(),
            created_at: Utc::now(),
        }
    }

    pub fn amount_paid(&self) -> f64 {
        self.payment_status.amount_paid(&self.pricing)
    }

    /// What the customer still owes.
    pub fn balance(&self) -> f64 {
        self.pricing.total - self.amount_paid()
    }
}

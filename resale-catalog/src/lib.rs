pub mod settings;
pub mod pricing;

pub use settings::{Currency, PieceCategory, Settings};
pub use pricing::{PriceBreakdown, PricingEngine};

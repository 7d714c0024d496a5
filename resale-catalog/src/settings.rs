use serde::{Deserialize, Serialize};
use std::fmt;

/// Foreign currency an item is priced in at the source shop.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Currency {
    #[default]
    Zar,
    Usd,
}

/// Logistics category driving the flat per-piece fee.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PieceCategory {
    #[default]
    LightMedium,
    Heavy,
}

impl Currency {
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Zar => "ZAR",
            Currency::Usd => "USD",
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Business terms used to price new orders.
///
/// Stored records written by older versions may omit fields; `#[serde(default)]`
/// fills each missing one from [`Settings::default`]. The snake_case aliases let
/// the same type load from configuration files and `RESALE__PRICING__*` variables.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Percent applied on top of the base cost.
    #[serde(alias = "margin_percentage")]
    pub margin_percentage: u32,
    #[serde(alias = "light_piece_tax")]
    pub light_piece_tax: f64,
    #[serde(alias = "heavy_piece_tax")]
    pub heavy_piece_tax: f64,
    /// MZN per ZAR.
    #[serde(alias = "zar_rate")]
    pub zar_rate: f64,
    /// MZN per USD.
    #[serde(alias = "usd_rate")]
    pub usd_rate: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            margin_percentage: 50,
            light_piece_tax: 180.0,
            heavy_piece_tax: 250.0,
            zar_rate: 5.0,
            usd_rate: 64.0,
        }
    }
}

impl Settings {
    pub fn rate_for(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Zar => self.zar_rate,
            Currency::Usd => self.usd_rate,
        }
    }

    pub fn fee_for(&self, category: PieceCategory) -> f64 {
        match category {
            PieceCategory::LightMedium => self.light_piece_tax,
            PieceCategory::Heavy => self.heavy_piece_tax,
        }
    }
}

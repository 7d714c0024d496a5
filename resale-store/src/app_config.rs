use resale_catalog::Settings;
use resale_core::input::sanitize_amount;
use resale_order::SummaryTemplate;
use serde::Deserialize;
use std::env;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub storage: StorageConfig,
    /// Settings used until the user saves their own.
    #[serde(default)]
    pub pricing: Settings,
    #[serde(default)]
    pub summary: SummaryTemplate,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// Directory holding one `<key>.json` file per stored blob.
    pub data_dir: PathBuf,
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Per-environment overrides, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Machine-local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg.. `RESALE__SERVER__PORT=9000`
            .add_source(config::Environment::with_prefix("RESALE").separator("__"))
            .build()?;

        s.try_deserialize()
    }

    /// Configured pricing defaults with unusable amounts coerced to zero.
    pub fn default_settings(&self) -> Settings {
        Settings {
            margin_percentage: self.pricing.margin_percentage,
            light_piece_tax: sanitize_amount(self.pricing.light_piece_tax),
            heavy_piece_tax: sanitize_amount(self.pricing.heavy_piece_tax),
            zar_rate: sanitize_amount(self.pricing.zar_rate),
            usd_rate: sanitize_amount(self.pricing.usd_rate),
        }
    }
}

/// Key under which the full order collection is stored.
pub const ORDERS_KEY: &str = "orders";

/// Key under which the settings record is stored.
pub const SETTINGS_KEY: &str = "settings";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Storage I/O error for key '{key}': {source}")]
    Io {
        key: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Persistence collaborator: a named blob in, a named blob out.
///
/// Every save is a full overwrite of the key, so implementations do not need
/// any transactional behaviour.
pub trait BlobStore: Send + Sync {
    /// Returns `Ok(None)` when nothing has been stored under `key` yet.
    fn load(&self, key: &str) -> Result<Option<String>, StoreError>;

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError>;
}

pub mod repository;
pub mod input;

pub use repository::{BlobStore, StoreError, ORDERS_KEY, SETTINGS_KEY};

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    ValidationError(String),
}

pub type CoreResult<T> = Result<T, CoreError>;

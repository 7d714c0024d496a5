use resale_core::{BlobStore, StoreError};
use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

/// Process-local store, mainly for tests and throwaway runs.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, String>>,
}

impl MemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_blob(self, key: &str, blob: &str) -> Self {
        self.blobs
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), blob.to_string());
        self
    }
}

impl BlobStore for MemoryBlobStore {
    fn load(&self, key: &str) -> Result<Option<String>, StoreError> {
        let blobs = self.blobs.lock().map_err(|e| StoreError::Backend(e.to_string()))?;
        Ok(blobs.get(key).cloned())
    }

    fn save(&self, key: &str, blob: &str) -> Result<(), StoreError> {
        let mut blobs = self.blobs.lock().map_err(|e| StoreError::Backend(e.to_string()))?;
        blobs.insert(key.to_string(), blob.to_string());
        Ok(())
    }
}

// In memory implementation of the BlobStore port.
//
// Purpose
// - Support handler tests and local development without touching disk.

use tokio::sync::Mutex;

use crate::shared::infrastructure::blob_store::{BlobStore, BlobStoreError};

#[derive(Default)]
pub struct InMemoryBlobStore {
    pub stored: Mutex<Vec<(String, Vec<u8>)>>,
    offline: std::sync::atomic::AtomicBool,
}

impl InMemoryBlobStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes every subsequent `store` call fail, to drive error-path tests.
    pub fn toggle_offline(&self) {
        self.offline
            .fetch_xor(true, std::sync::atomic::Ordering::SeqCst);
    }
}

#[async_trait::async_trait]
impl BlobStore for InMemoryBlobStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, BlobStoreError> {
        if self.offline.load(std::sync::atomic::Ordering::SeqCst) {
            return Err(BlobStoreError::Unavailable);
        }
        let mut stored = self.stored.lock().await;
        let path = format!("/uploads/{}-{}", stored.len(), original_name);
        stored.push((path.clone(), bytes.to_vec()));
        Ok(path)
    }
}

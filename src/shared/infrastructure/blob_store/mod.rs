pub mod disk;
pub mod in_memory;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum BlobStoreError {
    #[error("failed to write blob: {0}")]
    Io(#[from] std::io::Error),

    #[error("blob store unavailable")]
    Unavailable,
}

/// Port for persisting uploaded binary payloads.
///
/// `store` takes the client-supplied filename plus the raw bytes and
/// returns the public URL path the blob can be fetched from.
#[async_trait::async_trait]
pub trait BlobStore: Send + Sync {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, BlobStoreError>;
}

// Disk implementation of the BlobStore port.
//
// Responsibilities
// - Create the upload directory on first use.
// - Store blobs as `<millis>-<original name>` so repeated uploads of the
//   same filename do not clobber each other.

use std::path::PathBuf;

use chrono::Utc;

use crate::shared::infrastructure::blob_store::{BlobStore, BlobStoreError};

pub struct DiskBlobStore {
    root: PathBuf,
    public_prefix: String,
}

impl DiskBlobStore {
    pub fn new(root: impl Into<PathBuf>, public_prefix: impl Into<String>) -> Self {
        Self {
            root: root.into(),
            public_prefix: public_prefix.into(),
        }
    }
}

/// Reduces a client-supplied filename to a single safe path component.
/// Anything that looks like a separator is dropped or replaced, so a
/// hostile name cannot escape the upload root.
fn sanitize_filename(original: &str) -> String {
    let last = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or(original)
        .trim();
    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();
    if cleaned.trim_matches('.').is_empty() {
        "upload.bin".to_string()
    } else {
        cleaned
    }
}

#[async_trait::async_trait]
impl BlobStore for DiskBlobStore {
    async fn store(&self, original_name: &str, bytes: &[u8]) -> Result<String, BlobStoreError> {
        tokio::fs::create_dir_all(&self.root).await?;
        let filename = format!(
            "{}-{}",
            Utc::now().timestamp_millis(),
            sanitize_filename(original_name)
        );
        tokio::fs::write(self.root.join(&filename), bytes).await?;
        tracing::debug!(%filename, size = bytes.len(), "stored upload");
        Ok(format!("{}/{}", self.public_prefix, filename))
    }
}

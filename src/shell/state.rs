use std::sync::Arc;

use crate::modules::events::core::store::EventStore;
use crate::shared::infrastructure::blob_store::BlobStore;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<EventStore>,
    pub blobs: Arc<dyn BlobStore>,
}

impl AppState {
    pub fn new(blobs: Arc<dyn BlobStore>) -> Self {
        Self {
            events: Arc::new(EventStore::new()),
            blobs,
        }
    }
}

// In memory store for event records.
//
// Responsibilities
// - Own the collection outright; list/create/update/remove are the only
//   entry points that touch it.
// - Assign ids under the collection lock so concurrent creates never
//   collide.

use chrono::Utc;
use thiserror::Error;
use tokio::sync::Mutex;

use crate::modules::events::core::event::{Event, EventDraft};

#[derive(Debug, Error, PartialEq)]
pub enum EventStoreError {
    #[error("event {0} not found")]
    NotFound(i64),
}

#[derive(Default)]
struct Inner {
    events: Vec<Event>,
    last_id: i64,
}

/// Ordered in-memory collection of events. Insertion order is preserved;
/// nothing survives a process restart.
#[derive(Default)]
pub struct EventStore {
    inner: Mutex<Inner>,
}

impl EventStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn list(&self) -> Vec<Event> {
        self.inner.lock().await.events.clone()
    }

    /// Appends a new event and returns it with its assigned id.
    ///
    /// Ids are creation timestamps in milliseconds, bumped past the last
    /// issued id when two creates land in the same millisecond, so they are
    /// strictly increasing for the lifetime of the process.
    pub async fn create(&self, draft: EventDraft, image: String) -> Event {
        let mut inner = self.inner.lock().await;
        let id = Utc::now().timestamp_millis().max(inner.last_id + 1);
        inner.last_id = id;
        let event = Event {
            id,
            title: draft.title,
            date: draft.date,
            description: draft.description,
            category: draft.category,
            tags: draft.tags,
            image,
        };
        inner.events.push(event.clone());
        event
    }

    /// Replaces every text field of the matching event with the draft's
    /// values, absent ones included. `image` is only replaced when a new
    /// value is supplied. Leaves the collection untouched on a miss.
    pub async fn update(
        &self,
        id: i64,
        draft: EventDraft,
        image: Option<String>,
    ) -> Result<Event, EventStoreError> {
        let mut inner = self.inner.lock().await;
        let event = inner
            .events
            .iter_mut()
            .find(|event| event.id == id)
            .ok_or(EventStoreError::NotFound(id))?;
        event.title = draft.title;
        event.date = draft.date;
        event.description = draft.description;
        event.category = draft.category;
        event.tags = draft.tags;
        if let Some(image) = image {
            event.image = image;
        }
        Ok(event.clone())
    }

    /// Removes every event with the given id. Idempotent: removing an
    /// unknown id is a no-op. The stored image file, if any, is left on
    /// disk.
    pub async fn remove(&self, id: i64) {
        self.inner.lock().await.events.retain(|event| event.id != id);
    }
}

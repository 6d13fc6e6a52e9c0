use serde::{Deserialize, Serialize};

/// A single event record held by the store.
///
/// The text fields are all optional and unvalidated; a key is omitted from
/// the JSON representation when its value was never supplied. `image` is
/// always present and holds the public URL path of the stored upload, or an
/// empty string when the event has none.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    pub image: String,
}

/// The writable portion of an event, as decoded from a create or update
/// request body. `id` and `image` are assigned by the store and the blob
/// store respectively.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventDraft {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub tags: Option<String>,
}

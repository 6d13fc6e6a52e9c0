// Multipart decoding for the create and update request bodies.
//
// Both operations accept the same `multipart/form-data` shape: the five
// optional text fields plus an optional `image` file part.

use axum::extract::Multipart;
use axum::extract::multipart::MultipartError;

use crate::modules::events::core::event::EventDraft;

/// An uploaded file part, not yet handed to the blob store.
pub struct UploadedImage {
    pub original_name: String,
    pub bytes: Vec<u8>,
}

pub struct EventForm {
    pub draft: EventDraft,
    pub image: Option<UploadedImage>,
}

/// Drains the multipart stream into an [`EventForm`]. Unknown field names
/// are skipped. A file part with an empty filename counts as "no file":
/// browsers submit one for an untouched file input.
pub async fn decode_event_form(mut multipart: Multipart) -> Result<EventForm, MultipartError> {
    let mut draft = EventDraft::default();
    let mut image = None;

    while let Some(field) = multipart.next_field().await? {
        match field.name() {
            Some("title") => draft.title = Some(field.text().await?),
            Some("date") => draft.date = Some(field.text().await?),
            Some("description") => draft.description = Some(field.text().await?),
            Some("category") => draft.category = Some(field.text().await?),
            Some("tags") => draft.tags = Some(field.text().await?),
            Some("image") => {
                let original_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await?.to_vec();
                if !original_name.is_empty() {
                    image = Some(UploadedImage {
                        original_name,
                        bytes,
                    });
                }
            }
            _ => {}
        }
    }

    Ok(EventForm { draft, image })
}

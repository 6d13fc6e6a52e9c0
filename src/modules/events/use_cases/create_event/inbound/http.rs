use axum::{
    Json,
    extract::{Multipart, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::modules::events::adapters::inbound::multipart::decode_event_form;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, multipart: Multipart) -> impl IntoResponse {
    let form = match decode_event_form(multipart).await {
        Ok(form) => form,
        Err(err) => {
            return (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": format!("malformed multipart body: {err}") })),
            )
                .into_response();
        }
    };

    let image = match form.image {
        Some(upload) => match state.blobs.store(&upload.original_name, &upload.bytes).await {
            Ok(path) => path,
            Err(err) => {
                tracing::error!(%err, "failed to store uploaded image");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "failed to store uploaded image" })),
                )
                    .into_response();
            }
        },
        None => String::new(),
    };

    let event = state.events.create(form.draft, image).await;
    (StatusCode::CREATED, Json(event)).into_response()
}

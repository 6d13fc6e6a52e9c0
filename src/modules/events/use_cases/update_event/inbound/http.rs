use axum::{
    Json,
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde_json::json;

use crate::modules::events::adapters::inbound::multipart::decode_event_form;
use crate::modules::events::core::store::EventStoreError;
use crate::shell::state::AppState;

/// PUT semantics are a destructive full replace: text fields omitted from
/// the form clear the stored values. Only `image` is sticky, keeping its
/// prior value unless the request carries a new file.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> impl IntoResponse {
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
            Ok(path) => Some(path),
            Err(err) => {
                tracing::error!(%err, "failed to store uploaded image");
                return (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "failed to store uploaded image" })),
                )
                    .into_response();
            }
        },
        None => None,
    };

    match state.events.update(id, form.draft, image).await {
        Ok(event) => Json(event).into_response(),
        Err(EventStoreError::NotFound(_)) => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Event not found" })),
        )
            .into_response(),
    }
}

#[cfg(test)]
mod update_event_http_inbound_tests {
    use axum::{
        Router,
        body::Body,
        http::{Request, StatusCode},
        routing::put,
    };
    use http_body_util::BodyExt;
    use std::sync::Arc;
    use tower::ServiceExt;

    use crate::modules::events::core::event::EventDraft;
    use crate::shared::infrastructure::blob_store::in_memory::InMemoryBlobStore;
    use crate::shell::state::AppState;

    use super::handle;

    const BOUNDARY: &str = "test-boundary";

    fn multipart_body(fields: &[(&str, &str)], file: Option<(&str, &[u8])>) -> Vec<u8> {
        let mut body = Vec::new();
        for (name, value) in fields {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
                )
                .as_bytes(),
            );
        }
        if let Some((filename, bytes)) = file {
            body.extend_from_slice(
                format!(
                    "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"image\"; filename=\"{filename}\"\r\nContent-Type: application/octet-stream\r\n\r\n"
                )
                .as_bytes(),
            );
            body.extend_from_slice(bytes);
            body.extend_from_slice(b"\r\n");
        }
        body.extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        body
    }

    fn multipart_request(uri: &str, body: Vec<u8>) -> Request<Body> {
        Request::put(uri)
            .header(
                "content-type",
                format!("multipart/form-data; boundary={BOUNDARY}"),
            )
            .body(Body::from(body))
            .unwrap()
    }

    fn make_test_state() -> AppState {
        AppState::new(Arc::new(InMemoryBlobStore::new()))
    }

    fn app(state: AppState) -> Router {
        Router::new()
            .route("/events/{id}", put(handle))
            .with_state(state)
    }

    async fn seed_event(state: &AppState, title: &str, image: &str) -> i64 {
        state
            .events
            .create(
                EventDraft {
                    title: Some(title.into()),
                    date: Some("2024-01-01".into()),
                    description: Some("d".into()),
                    category: Some("tech".into()),
                    tags: Some("a,b".into()),
                },
                image.to_string(),
            )
            .await
            .id
    }

    #[tokio::test]
    async fn it_should_return_200_and_keep_the_prior_image_when_no_file_is_sent() {
        let state = make_test_state();
        let id = seed_event(&state, "Launch", "/uploads/1-a.png").await;
        let body = multipart_body(&[("title", "Renamed"), ("date", "2024-02-02")], None);

        let response = app(state)
            .oneshot(multipart_request(&format!("/events/{id}"), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json["id"].as_i64().unwrap(), id);
        assert_eq!(json["title"], "Renamed");
        assert_eq!(json["image"], "/uploads/1-a.png");
        // Full replace: the omitted description is gone.
        assert!(json.get("description").is_none());
    }

    #[tokio::test]
    async fn it_should_replace_the_image_when_a_new_file_is_sent() {
        let state = make_test_state();
        let id = seed_event(&state, "Launch", "/uploads/1-a.png").await;
        let body = multipart_body(&[("title", "Launch")], Some(("new.png", b"new-bytes")));

        let response = app(state)
            .oneshot(multipart_request(&format!("/events/{id}"), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        let image = json["image"].as_str().unwrap();
        assert!(image.starts_with("/uploads/"));
        assert!(image.ends_with("new.png"));
    }

    #[tokio::test]
    async fn it_should_return_404_and_leave_state_untouched_for_an_unknown_id() {
        let state = make_test_state();
        let id = seed_event(&state, "Keep me", "").await;
        let body = multipart_body(&[("title", "Renamed")], None);

        let response = app(state.clone())
            .oneshot(multipart_request(&format!("/events/{}", id + 1), body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(json, serde_json::json!({ "error": "Event not found" }));

        let events = state.events.list().await;
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].title.as_deref(), Some("Keep me"));
    }

    #[tokio::test]
    async fn it_should_return_400_for_a_non_numeric_id() {
        let body = multipart_body(&[("title", "x")], None);

        let response = app(make_test_state())
            .oneshot(multipart_request("/events/not-a-number", body))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }
}

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::shell::state::AppState;

/// Delete is idempotent: 204 whether or not anything matched.
pub async fn handle(State(state): State<AppState>, Path(id): Path<i64>) -> impl IntoResponse {
    state.events.remove(id).await;
    StatusCode::NO_CONTENT
}

//! Router for the event API

use std::sync::Arc;

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::state::AppState;
use crate::scheduling;

type SharedState = Arc<AppState>;

async fn create_event_handler(
    State(state): State<SharedState>,
    Json(event): Json<public::CalendarEvent>,
) -> Json<public::CreateEventResponse> {
    let resp = scheduling::create_event(&state.config, &event).await;
    Json(resp)
}

/// Create the event router
pub fn router() -> Router<SharedState> {
    Router::new().route("/create-event", axum::routing::post(create_event_handler))
}

//! API routes module

pub mod availability;
pub mod events;

use std::sync::Arc;

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<AppState>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // POST /check-availability
        .merge(availability::router())
        // POST /create-event
        .merge(events::router())
}

//! Router for the availability API

use std::sync::Arc;

use axum::{Json, Router, extract::State};

use super::public;
use crate::api::state::AppState;
use crate::scheduling;

type SharedState = Arc<AppState>;

async fn check_availability_handler(
    State(state): State<SharedState>,
    Json(query): Json<public::AvailabilityQuery>,
) -> Json<public::AvailabilityResponse> {
    tracing::info!("Checking availability for {:?}", query.query);
    let resp = scheduling::check_availability(&state.config, &query).await;
    Json(resp)
}

/// Create the availability router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/check-availability",
        axum::routing::post(check_availability_handler),
    )
}

//! The two scheduling flows, shared by the HTTP API and the CLI.
//!
//! Both are straight pipelines with no retries. Failures never bubble
//! up as errors, they are described in the response body instead.

use anyhow::Result;

use crate::ai::time_window::{interpret, parse_time_window};
use crate::api::public::availability::{AvailabilityQuery, AvailabilityResponse};
use crate::api::public::events::{CalendarEvent, CreateEventResponse};
use crate::core::AppConfig;
use crate::microsoft::calendar::{self, CreateEventOutcome, Event, NewEvent};
use crate::microsoft::oauth::acquire_token_for_client;

fn unavailable(summary: String) -> AvailabilityResponse {
    AvailabilityResponse {
        available: false,
        summary,
    }
}

async fn graph_token(config: &AppConfig) -> Result<String> {
    acquire_token_for_client(
        &config.authority_url,
        &config.tenant_id,
        &config.client_id,
        &config.client_secret,
        &config.graph_scope,
    )
    .await
}

/// Answer whether the calendar is free during the time described by
/// the query.
pub async fn check_availability(
    config: &AppConfig,
    query: &AvailabilityQuery,
) -> AvailabilityResponse {
    let window = match interpret(
        &query.query,
        &config.openai_api_hostname,
        &config.openai_api_key,
        &config.openai_model,
    )
    .await
    .and_then(|text| parse_time_window(&text))
    {
        Ok(window) => window,
        Err(e) => {
            tracing::warn!("Time parsing failed for {:?}: {}", query.query, e);
            return unavailable(format!("Time parsing failed: {}", e));
        }
    };

    let token = match graph_token(config).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to acquire Graph token: {}", e);
            return unavailable(format!("Calendar access failed: {}", e));
        }
    };

    match calendar::list_events(
        &config.graph_api_url,
        &token,
        &window.start_time,
        &window.end_time,
    )
    .await
    {
        Ok(events) => summarize_events(&events),
        Err(e) => {
            tracing::error!("Calendar lookup failed: {}", e);
            unavailable(format!("Calendar lookup failed: {}", e))
        }
    }
}

pub fn summarize_events(events: &[Event]) -> AvailabilityResponse {
    if events.is_empty() {
        return AvailabilityResponse {
            available: true,
            summary: String::from("You're free during that time."),
        };
    }

    let listing = events
        .iter()
        .map(|e| {
            format!(
                "{} from {} to {}",
                e.subject.as_deref().unwrap_or_default(),
                e.start.date_time,
                e.end.date_time
            )
        })
        .collect::<Vec<_>>()
        .join("; ");

    unavailable(format!("You have the following event(s): {}", listing))
}

/// Create `event` on the calendar.
pub async fn create_event(config: &AppConfig, event: &CalendarEvent) -> CreateEventResponse {
    let token = match graph_token(config).await {
        Ok(token) => token,
        Err(e) => {
            tracing::error!("Failed to acquire Graph token: {}", e);
            return CreateEventResponse::failed(e.to_string());
        }
    };

    let wire_event = NewEvent::from(event);
    match calendar::create_event(&config.graph_api_url, &token, &wire_event).await {
        Ok(CreateEventOutcome::Created) => {
            tracing::info!("Created event {:?}", event.subject);
            CreateEventResponse::created()
        }
        Ok(CreateEventOutcome::Rejected { body, .. }) => CreateEventResponse::failed(body),
        Err(e) => CreateEventResponse::failed(e.to_string()),
    }
}

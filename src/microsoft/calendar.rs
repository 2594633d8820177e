//! Microsoft Graph calendar operations: reading the calendar view
//! for a time range and creating events.

use anyhow::Result;
use http::StatusCode;
use serde::{Deserialize, Serialize};

use crate::api::public::events::CalendarEvent;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DateTimeTimeZone {
    #[serde(rename = "dateTime")]
    pub date_time: String,
    #[serde(rename = "timeZone")]
    pub time_zone: String,
}

impl DateTimeTimeZone {
    pub fn utc(date_time: &str) -> Self {
        Self {
            date_time: date_time.to_string(),
            time_zone: String::from("UTC"),
        }
    }
}

/// Event as returned from the calendar view. Graph sends a lot more
/// than this, everything else is ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Event {
    // Graph sends `null` for untitled events
    #[serde(default)]
    pub subject: Option<String>,
    pub start: DateTimeTimeZone,
    pub end: DateTimeTimeZone,
}

#[derive(Debug, Deserialize)]
struct CalendarViewResponse {
    #[serde(default)]
    value: Vec<Event>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct EmailAddress {
    pub address: String,
    pub name: String,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Attendee {
    #[serde(rename = "emailAddress")]
    pub email_address: EmailAddress,
    pub r#type: String,
}

impl Attendee {
    /// Required attendee named after the local part of their address
    pub fn required(address: &str) -> Self {
        let name = address.split('@').next().unwrap_or(address);
        Self {
            email_address: EmailAddress {
                address: address.to_string(),
                name: name.to_string(),
            },
            r#type: String::from("required"),
        }
    }
}

/// Wire shape of an event creation request
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewEvent {
    pub subject: String,
    pub start: DateTimeTimeZone,
    pub end: DateTimeTimeZone,
    pub attendees: Vec<Attendee>,
}

impl From<&CalendarEvent> for NewEvent {
    fn from(event: &CalendarEvent) -> Self {
        Self {
            subject: event.subject.clone(),
            start: DateTimeTimeZone::utc(&event.start_time),
            end: DateTimeTimeZone::utc(&event.end_time),
            attendees: event
                .attendees
                .iter()
                .map(|email| Attendee::required(email))
                .collect(),
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum CreateEventOutcome {
    Created,
    Rejected { status: StatusCode, body: String },
}

/// List the events in the calendar view between `start` and `end`.
///
/// Any non-success status from Graph is treated as an empty calendar
/// so a provider error reads the same as being free. Only transport
/// and decoding failures are returned as errors.
pub async fn list_events(
    graph_api_url: &str,
    access_token: &str,
    start: &str,
    end: &str,
) -> Result<Vec<Event>> {
    let url = format!("{}/me/calendarView", graph_api_url.trim_end_matches("/"));
    let res = reqwest::Client::new()
        .get(&url)
        .bearer_auth(access_token)
        .header("Prefer", "outlook.timezone=\"UTC\"")
        .query(&[("startDateTime", start), ("endDateTime", end)])
        .send()
        .await?;

    let status = res.status();
    if status != StatusCode::OK {
        let body = res.text().await.unwrap_or_default();
        tracing::warn!(
            "Calendar view returned {}, treating as no events: {}",
            status,
            body
        );
        return Ok(vec![]);
    }

    let resp: CalendarViewResponse = res.json().await?;
    Ok(resp.value)
}

pub async fn create_event(
    graph_api_url: &str,
    access_token: &str,
    event: &NewEvent,
) -> Result<CreateEventOutcome> {
    let url = format!("{}/me/events", graph_api_url.trim_end_matches("/"));
    let res = reqwest::Client::new()
        .post(&url)
        .bearer_auth(access_token)
        .header("Content-Type", "application/json")
        .json(event)
        .send()
        .await?;

    let status = res.status();
    if status == StatusCode::CREATED {
        return Ok(CreateEventOutcome::Created);
    }

    let body = res.text().await?;
    tracing::error!("Event creation failed with {}: {}", status, body);
    Ok(CreateEventOutcome::Rejected { status, body })
}

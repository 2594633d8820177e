//! Public types for the event API
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct CalendarEvent {
    pub subject: String,
    pub start_time: String,
    pub end_time: String,
    #[serde(default)]
    pub attendees: Vec<String>,
}

/// Exactly one of `message` or `error` is set depending on `success`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CreateEventResponse {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateEventResponse {
    pub fn created() -> Self {
        Self {
            success: true,
            message: Some(String::from("Event created successfully.")),
            error: None,
        }
    }

    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            message: None,
            error: Some(error.into()),
        }
    }
}

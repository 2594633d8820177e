//! Turns a free-text scheduling question into a one hour UTC time
//! window. The LLM does all of the date math, this module only builds
//! the prompt and checks that what came back has the right shape.

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::openai::{Message, Role, completion, completion_content};

const SYSTEM_MESSAGE: &str = "You convert scheduling questions into JSON with 'start_time' and 'end_time' in ISO 8601 UTC format.";

// The example object must stay double quoted. Replies are parsed as
// strict JSON and single quotes copied from the example would fail.
fn user_message(phrase: &str) -> String {
    format!(
        "Convert this to a 1-hour ISO 8601 time window in UTC: '{}'. Return only JSON like {{\"start_time\": \"...\", \"end_time\": \"...\"}}",
        phrase
    )
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeWindow {
    pub start_time: String,
    pub end_time: String,
}

/// Ask the LLM for the time window described by `phrase`. Returns
/// the raw reply which is not guaranteed to be JSON.
pub async fn interpret(
    phrase: &str,
    api_hostname: &str,
    api_key: &str,
    model: &str,
) -> Result<String> {
    let messages = vec![
        Message::new(Role::System, SYSTEM_MESSAGE),
        Message::new(Role::User, &user_message(phrase)),
    ];
    // Temperature 0 so the same question maps to the same window
    let resp = completion(&messages, api_hostname, api_key, model, 0.0).await?;
    let content = completion_content(&resp)?;
    tracing::debug!("Time window from LLM for {:?}: {}", phrase, content);

    Ok(content)
}

/// Parse the LLM output. Both fields must be present and be
/// strings, their contents are handed to the calendar unchecked.
pub fn parse_time_window(text: &str) -> Result<TimeWindow> {
    let window: TimeWindow = serde_json::from_str(strip_code_fence(text))?;
    Ok(window)
}

// Models like to wrap JSON in a markdown block even when told not to
fn strip_code_fence(text: &str) -> &str {
    let text = text.trim();
    let Some(inner) = text.strip_prefix("```") else {
        return text;
    };
    let inner = inner.strip_suffix("```").unwrap_or(inner);
    // Language tag, with or without a newline after it
    inner
        .trim_start_matches(|c: char| c.is_ascii_alphanumeric())
        .trim()
}

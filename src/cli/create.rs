use anyhow::Result;

use crate::api::public::events::CalendarEvent;
use crate::core::AppConfig;
use crate::scheduling::create_event;

pub async fn run(
    subject: String,
    start_time: String,
    end_time: String,
    attendees: Vec<String>,
    config: &AppConfig,
) -> Result<()> {
    let event = CalendarEvent {
        subject,
        start_time,
        end_time,
        attendees,
    };
    let resp = create_event(config, &event).await;
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}

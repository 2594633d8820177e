use anyhow::Result;

use crate::api::public::availability::AvailabilityQuery;
use crate::core::AppConfig;
use crate::scheduling::check_availability;

pub async fn run(query: String, config: &AppConfig) -> Result<()> {
    let resp = check_availability(config, &AvailabilityQuery { query }).await;
    println!("{}", serde_json::to_string_pretty(&resp)?);
    Ok(())
}

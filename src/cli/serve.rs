use anyhow::Result;

use crate::api;
use crate::core::AppConfig;

pub async fn run(host: String, port: String, config: AppConfig) -> Result<()> {
    api::serve(host, port, config).await
}

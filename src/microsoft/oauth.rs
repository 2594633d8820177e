//! Client credential token exchange against the Microsoft identity
//! platform. Tokens are fetched fresh for every operation and never
//! cached.

use anyhow::{Result, anyhow, bail};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub access_token: Option<String>,
    pub token_type: Option<String>,
    pub expires_in: Option<i64>,
}

#[derive(Debug, Deserialize)]
struct TokenErrorResponse {
    error: String,
    error_description: Option<String>,
}

/// Acquire an app-only access token for `scope` using the client
/// credential grant.
pub async fn acquire_token_for_client(
    authority_url: &str,
    tenant_id: &str,
    client_id: &str,
    client_secret: &str,
    scope: &str,
) -> Result<String> {
    let url = format!(
        "{}/{}/oauth2/v2.0/token",
        authority_url.trim_end_matches("/"),
        tenant_id
    );
    let params = [
        ("grant_type", "client_credentials"),
        ("client_id", client_id),
        ("client_secret", client_secret),
        ("scope", scope),
    ];

    let res = reqwest::Client::new().post(&url).form(&params).send().await?;
    let status = res.status();
    let body = res.text().await?;

    if !status.is_success() {
        // The identity platform explains rejections in the body
        let reason = serde_json::from_str::<TokenErrorResponse>(&body)
            .map(|e| e.error_description.unwrap_or(e.error))
            .unwrap_or(body);
        bail!("Token request failed with status {}: {}", status, reason);
    }

    let token: TokenResponse = serde_json::from_str(&body)?;
    tracing::debug!(
        "Acquired {} token expiring in {:?}s",
        token.token_type.as_deref().unwrap_or("unknown"),
        token.expires_in
    );

    token
        .access_token
        .filter(|t| !t.is_empty())
        .ok_or(anyhow!("Token response did not include an access token"))
}

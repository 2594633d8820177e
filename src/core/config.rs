use std::env;
use std::fmt;

use anyhow::{Result, anyhow};

#[derive(Clone)]
pub struct AppConfig {
    pub openai_api_hostname: String,
    pub openai_api_key: String,
    pub openai_model: String,
    pub client_id: String,
    pub client_secret: String,
    pub tenant_id: String,
    pub authority_url: String,
    pub graph_api_url: String,
    pub graph_scope: String,
}

impl AppConfig {
    /// Reads the config from the process environment. Called once at
    /// startup, the result is never reloaded.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |key: &str| -> Result<String> {
            lookup(key)
                .filter(|v| !v.is_empty())
                .ok_or(anyhow!("Missing env var {}", key))
        };
        let optional = |key: &str, default: &str| -> String {
            lookup(key)
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Ok(Self {
            openai_api_hostname: optional("CALBRIDGE_LLM_HOST", "https://api.openai.com"),
            openai_api_key: required("OPENAI_API_KEY")?,
            openai_model: optional("CALBRIDGE_LLM_MODEL", "gpt-3.5-turbo"),
            client_id: required("AZURE_CLIENT_ID")?,
            client_secret: required("AZURE_CLIENT_SECRET")?,
            tenant_id: required("AZURE_TENANT_ID")?,
            authority_url: optional(
                "CALBRIDGE_AUTHORITY_URL",
                "https://login.microsoftonline.com",
            ),
            graph_api_url: optional(
                "CALBRIDGE_GRAPH_API_URL",
                "https://graph.microsoft.com/v1.0",
            ),
            graph_scope: optional(
                "CALBRIDGE_GRAPH_SCOPE",
                "https://graph.microsoft.com/.default",
            ),
        })
    }
}

// Secrets stay out of the logs
impl fmt::Debug for AppConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppConfig")
            .field("openai_api_hostname", &self.openai_api_hostname)
            .field("openai_api_key", &"<redacted>")
            .field("openai_model", &self.openai_model)
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .field("tenant_id", &self.tenant_id)
            .field("authority_url", &self.authority_url)
            .field("graph_api_url", &self.graph_api_url)
            .field("graph_scope", &self.graph_scope)
            .finish()
    }
}

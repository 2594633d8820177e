//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::Arc;

use axum::{Router, body::Body};
use serde_json::Value;

use calbridge::api::AppState;
use calbridge::api::app;
use calbridge::core::AppConfig;

pub const TENANT_ID: &str = "test-tenant";

/// Creates a test application router where the LLM, identity and
/// Graph APIs all point at `server_url`, typically a
/// `mockito::Server`.
pub fn test_app(server_url: &str) -> Router {
    let app_config = AppConfig {
        openai_api_hostname: server_url.to_string(),
        openai_api_key: String::from("test-api-key"),
        openai_model: String::from("gpt-3.5-turbo"),
        client_id: String::from("test_client_id"),
        client_secret: String::from("test_client_secret"),
        tenant_id: String::from(TENANT_ID),
        authority_url: server_url.to_string(),
        graph_api_url: server_url.to_string(),
        graph_scope: String::from("https://graph.microsoft.com/.default"),
    };
    let app_state = AppState::new(app_config);
    app(Arc::new(app_state))
}

pub fn token_path() -> String {
    format!("/{}/oauth2/v2.0/token", TENANT_ID)
}

/// Wraps `content` in an OpenAI chat completion response
pub fn completion_body(content: &str) -> String {
    serde_json::json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1694268190,
        "model": "gpt-3.5-turbo",
        "choices": [{
            "index": 0,
            "message": {"role": "assistant", "content": content},
            "finish_reason": "stop"
        }]
    })
    .to_string()
}

pub async fn body_to_json(body: Body) -> Value {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not JSON")
}

//! User Directory Commands
//!
//! One-shot fetch of the user collection from the remote endpoint.

use directory_view::{FetchError, Record};

use crate::config::USERS_ENDPOINT;

/// Fetch every user. Non-2xx statuses, transport errors and bad JSON
/// all surface as `FetchError`.
pub async fn fetch_users() -> Result<Vec<Record>, FetchError> {
    tracing::info!("[FETCH] GET {}", USERS_ENDPOINT);

    let response = reqwest::get(USERS_ENDPOINT)
        .await
        .map_err(|e| FetchError::Transport(e.to_string()))?;

    let status = response.status();
    tracing::debug!("[FETCH] Response Status: {}", status.as_u16());
    if !status.is_success() {
        return Err(FetchError::Status { status: status.as_u16() });
    }

    let body = response
        .text()
        .await
        .map_err(|e| FetchError::Transport(format!("Failed to read response body: {}", e)))?;

    parse_users(&body)
}

/// Decode the endpoint's JSON array
pub fn parse_users(body: &str) -> Result<Vec<Record>, FetchError> {
    serde_json::from_str(body).map_err(|e| FetchError::Decode(e.to_string()))
}

use thiserror::Error;

/// Failure of the one-shot user fetch.
///
/// `Display` is the message shown in the error view.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FetchError {
    /// Endpoint answered with a non-2xx status
    #[error("Failed to fetch users (HTTP {status})")]
    Status { status: u16 },

    /// Request never produced a response
    #[error("Failed to fetch users: {0}")]
    Transport(String),

    /// Body was not a JSON array of users
    #[error("Failed to read users: {0}")]
    Decode(String),
}

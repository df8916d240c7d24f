use thiserror::Error;

/// Failures from the account/profile and result stores.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),

    #[error("email already registered: {0}")]
    Conflict(String),
}

/// Failure from the chat/LLM collaborator.
#[derive(Debug, Error)]
#[error("assistant request failed: {0}")]
pub struct AssistantError(pub String);

//! Dispatch error taxonomy
//!
//! Every failure a user can trigger maps to one of these variants, and all of
//! them are recoverable: the form stays up and the user resubmits.

use thiserror::Error;

/// Errors surfaced at the dispatch boundary.
///
/// `Service` wraps anything that went wrong past our own validation: network
/// failure, an invalid credential rejected by the API, quota exhaustion. The
/// message is already human-readable and safe to render verbatim.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("No API key provided. Set one in the form or via OPENAI_API_KEY.")]
    MissingCredential,

    #[error("Prompt is empty. Type a question or idea first.")]
    EmptyPrompt,

    #[error("Unknown persona: {0}")]
    UnknownPersona(String),

    #[error("{0}")]
    Service(String),
}

impl DispatchError {
    /// Wrap an upstream client error. Never called before validation passes,
    /// so a `Service` error always means a real call was attempted.
    pub fn service(err: impl std::fmt::Display) -> Self {
        DispatchError::Service(err.to_string())
    }
}

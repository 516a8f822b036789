//! # Chat Feature
//!
//! Persona-conditioned question answering against the completion service.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with request construction and dispatch

pub mod dispatcher;

pub use dispatcher::{build_chat_request, ChatDispatcher, ChatRequest, CompletionService};

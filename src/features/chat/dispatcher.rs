//! # Chat Dispatch
//!
//! Validates user input, binds exactly one persona's system prompt into a
//! request, and performs a single call to the completion service. Errors are
//! classified at this boundary and never propagate past it as anything but
//! `DispatchError`.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use uuid::Uuid;

use crate::core::DispatchError;
use crate::features::personas::Persona;

/// One completion request, constructed fresh per user action.
///
/// The `system_prompt` always comes from the persona selected at build time,
/// so persona and instruction cannot drift apart between selection and send.
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub system_prompt: String,
    pub user_prompt: String,
    pub temperature: f32,
    pub max_tokens: u32,
}

/// Seam to the hosted completion service.
///
/// The production implementation lives in `features::openai`; tests
/// substitute a recording stub.
#[async_trait]
pub trait CompletionService: Send + Sync {
    /// Perform one chat completion and return the message text.
    async fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String>;
}

/// Build a chat request from a persona and the user's prompt.
///
/// Fails with `EmptyPrompt` for empty or whitespace-only input.
pub fn build_chat_request(
    persona: &Persona,
    user_prompt: &str,
    temperature: f32,
    max_tokens: u32,
) -> Result<ChatRequest, DispatchError> {
    let user_prompt = user_prompt.trim();
    if user_prompt.is_empty() {
        return Err(DispatchError::EmptyPrompt);
    }

    Ok(ChatRequest {
        system_prompt: persona.system_prompt.clone(),
        user_prompt: user_prompt.to_string(),
        temperature,
        max_tokens,
    })
}

/// Dispatcher for chat requests. One blocking call per user action; no
/// retries, no idempotency guarantee at the configured temperature.
pub struct ChatDispatcher<S> {
    service: S,
}

impl<S: CompletionService> ChatDispatcher<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Send one request. The credential is checked before any network
    /// attempt; service failures come back as `DispatchError::Service` with
    /// a message safe to show the user.
    pub async fn send(
        &self,
        request: &ChatRequest,
        api_key: Option<&str>,
    ) -> Result<String, DispatchError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(DispatchError::MissingCredential),
        };

        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] Dispatching chat request | Prompt length: {} | Temperature: {}",
            request.user_prompt.len(),
            request.temperature
        );

        let response = self
            .service
            .complete(request, api_key)
            .await
            .map_err(DispatchError::service)?;

        let response = response.trim().to_string();
        debug!("[{request_id}] Got response: {} chars", response.len());
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::personas::PersonaRegistry;

    #[test]
    fn test_build_rejects_empty_prompt() {
        let registry = PersonaRegistry::new();
        let persona = registry.lookup("director").unwrap();

        let err = build_chat_request(persona, "", 0.8, 600).unwrap_err();
        assert!(matches!(err, DispatchError::EmptyPrompt));

        let err = build_chat_request(persona, "   ", 0.8, 600).unwrap_err();
        assert!(matches!(err, DispatchError::EmptyPrompt));
    }

    #[test]
    fn test_build_accepts_real_prompt() {
        let registry = PersonaRegistry::new();
        let persona = registry.lookup("director").unwrap();

        let request = build_chat_request(persona, "hello", 0.8, 600).unwrap();
        assert_eq!(request.user_prompt, "hello");
        assert_eq!(request.system_prompt, persona.system_prompt);
        assert_eq!(request.max_tokens, 600);
    }

    #[test]
    fn test_build_binds_selected_persona() {
        // Rebuilding with a different persona must change the instruction;
        // the binding is never stale.
        let registry = PersonaRegistry::new();
        let director = registry.lookup("director").unwrap();
        let curator = registry.lookup("curator").unwrap();

        let first = build_chat_request(director, "same prompt", 0.8, 600).unwrap();
        let second = build_chat_request(curator, "same prompt", 0.8, 600).unwrap();

        assert_eq!(first.user_prompt, second.user_prompt);
        assert_ne!(first.system_prompt, second.system_prompt);
    }
}

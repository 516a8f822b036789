//! # OpenAI Client
//!
//! Production implementation of the `CompletionService` and `ImageService`
//! seams against an OpenAI-compatible API. One short-lived client handle per
//! dispatch; the bearer credential is attached per request and never logged.
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false

use anyhow::{anyhow, bail, Result};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::core::Config;
use crate::features::chat::{ChatRequest, CompletionService};
use crate::features::image_gen::{GeneratedImage, ImageRequest, ImageService};

/// Upper bound on one external call. No retry on expiry.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(45);

/// Client for the hosted completion and image services
pub struct OpenAiClient {
    client: reqwest::Client,
    base_url: String,
    chat_model: String,
    image_model: String,
}

impl OpenAiClient {
    pub fn new(config: &Config) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
            chat_model: config.chat_model.clone(),
            image_model: config.image_model.clone(),
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiClient {
    async fn complete(&self, request: &ChatRequest, api_key: &str) -> Result<String> {
        let body = ChatCompletionBody {
            model: &self.chat_model,
            messages: vec![
                WireMessage {
                    role: "system",
                    content: &request.system_prompt,
                },
                WireMessage {
                    role: "user",
                    content: &request.user_prompt,
                },
            ],
            temperature: request.temperature,
            max_tokens: request.max_tokens,
        };

        let response = self
            .client
            .post(format!("{}/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("{}", api_error_message(status.as_u16(), &body));
        }

        let completion: ChatCompletionResponse = response.json().await?;
        completion
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| anyhow!("The service returned no message content."))
    }
}

#[async_trait]
impl ImageService for OpenAiClient {
    async fn generate(&self, request: &ImageRequest, api_key: &str) -> Result<GeneratedImage> {
        let body = ImageGenerationBody {
            model: &self.image_model,
            prompt: &request.prompt,
            n: 1,
            size: request.size.as_str(),
        };

        let response = self
            .client
            .post(format!("{}/images/generations", self.base_url))
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            bail!("{}", api_error_message(status.as_u16(), &body));
        }

        let generation: ImageGenerationResponse = response.json().await?;
        let image = generation
            .data
            .into_iter()
            .next()
            .ok_or_else(|| anyhow!("The service returned no image."))?;

        let url = image
            .url
            .ok_or_else(|| anyhow!("The service returned no image URL."))?;

        Ok(GeneratedImage {
            url,
            revised_prompt: image.revised_prompt,
        })
    }
}

/// Turn an API error response into a message fit for the status bar.
///
/// Prefers the message embedded in the error body; falls back to a
/// classification by status code.
pub fn api_error_message(status: u16, body: &str) -> String {
    if let Ok(parsed) = serde_json::from_str::<ApiErrorEnvelope>(body) {
        if !parsed.error.message.is_empty() {
            return parsed.error.message;
        }
    }

    match status {
        401 | 403 => "Invalid API key. Check your credential and try again.".to_string(),
        429 => "Rate limited or quota exceeded. Wait a moment and try again.".to_string(),
        400 => "The service rejected the request. Try a different prompt.".to_string(),
        500..=599 => "The service is having trouble. Try again shortly.".to_string(),
        _ => format!("The service returned an unexpected error (HTTP {status})."),
    }
}

// Wire types

#[derive(Serialize)]
struct WireMessage<'a> {
    role: &'static str,
    content: &'a str,
}

#[derive(Serialize)]
struct ChatCompletionBody<'a> {
    model: &'a str,
    messages: Vec<WireMessage<'a>>,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: ChoiceMessage,
}

#[derive(Deserialize)]
struct ChoiceMessage {
    content: Option<String>,
}

#[derive(Serialize)]
struct ImageGenerationBody<'a> {
    model: &'a str,
    prompt: &'a str,
    n: u8,
    size: &'static str,
}

#[derive(Deserialize)]
struct ImageGenerationResponse {
    #[serde(default)]
    data: Vec<ImageDatum>,
}

#[derive(Deserialize)]
struct ImageDatum {
    url: Option<String>,
    revised_prompt: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorEnvelope {
    error: ApiErrorBody,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::image_gen::ImageSize;

    #[test]
    fn test_chat_body_shape() {
        let body = ChatCompletionBody {
            model: "gpt-4o-mini",
            messages: vec![
                WireMessage { role: "system", content: "You are a video director." },
                WireMessage { role: "user", content: "hi" },
            ],
            temperature: 0.8,
            max_tokens: 600,
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-4o-mini");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][1]["content"], "hi");
        assert_eq!(json["max_tokens"], 600);
    }

    #[test]
    fn test_image_body_shape() {
        let body = ImageGenerationBody {
            model: "gpt-image-1",
            prompt: "a red dress",
            n: 1,
            size: ImageSize::Wide.as_str(),
        };

        let json = serde_json::to_value(&body).unwrap();
        assert_eq!(json["model"], "gpt-image-1");
        assert_eq!(json["size"], "1792x1024");
        assert_eq!(json["n"], 1);
    }

    #[test]
    fn test_completion_response_parses() {
        let raw = r#"{"choices":[{"message":{"role":"assistant","content":"Action!"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert_eq!(
            parsed.choices[0].message.content.as_deref(),
            Some("Action!")
        );
    }

    #[test]
    fn test_error_message_prefers_body() {
        let body = r#"{"error":{"message":"You exceeded your current quota.","type":"insufficient_quota"}}"#;
        assert_eq!(api_error_message(429, body), "You exceeded your current quota.");
    }

    #[test]
    fn test_error_message_falls_back_to_status() {
        assert!(api_error_message(401, "not json").contains("Invalid API key"));
        assert!(api_error_message(429, "").contains("Rate limited"));
        assert!(api_error_message(503, "").contains("having trouble"));
    }
}

//! # Image Generation Dispatch
//!
//! Composes a persona-flavored image prompt and performs one call to the
//! image service. Same validation and error-wrapping discipline as chat.

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, info};
use uuid::Uuid;

use crate::core::DispatchError;
use crate::features::personas::Persona;

/// Supported output dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageSize {
    Small,
    #[default]
    Square,
    Wide,
    Tall,
}

impl ImageSize {
    /// Parse from the wire dimension string
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "512x512" => Some(ImageSize::Small),
            "1024x1024" => Some(ImageSize::Square),
            "1792x1024" => Some(ImageSize::Wide),
            "1024x1792" => Some(ImageSize::Tall),
            _ => None,
        }
    }

    /// Wire dimension string sent to the image service
    pub fn as_str(&self) -> &'static str {
        match self {
            ImageSize::Small => "512x512",
            ImageSize::Square => "1024x1024",
            ImageSize::Wide => "1792x1024",
            ImageSize::Tall => "1024x1792",
        }
    }

    /// Human label for the size selector
    pub fn label(&self) -> &'static str {
        match self {
            ImageSize::Small => "Small (512x512)",
            ImageSize::Square => "Square (1024x1024)",
            ImageSize::Wide => "Wide (1792x1024)",
            ImageSize::Tall => "Tall (1024x1792)",
        }
    }

    pub fn all() -> &'static [ImageSize] {
        &[
            ImageSize::Small,
            ImageSize::Square,
            ImageSize::Wide,
            ImageSize::Tall,
        ]
    }

    /// Next size in selector order, wrapping around
    pub fn next(&self) -> ImageSize {
        let all = Self::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + 1) % all.len()]
    }

    /// Previous size in selector order, wrapping around
    pub fn prev(&self) -> ImageSize {
        let all = Self::all();
        let idx = all.iter().position(|s| s == self).unwrap_or(0);
        all[(idx + all.len() - 1) % all.len()]
    }
}

/// One image-generation request, constructed fresh per user action
#[derive(Debug, Clone)]
pub struct ImageRequest {
    /// Persona description and user prompt, already composed
    pub prompt: String,
    pub size: ImageSize,
}

/// A generated image as returned by the service
#[derive(Debug, Clone)]
pub struct GeneratedImage {
    pub url: String,
    /// The service may reword the prompt; kept for display
    pub revised_prompt: Option<String>,
}

/// Seam to the hosted image service
#[async_trait]
pub trait ImageService: Send + Sync {
    /// Generate one image and return its URL
    async fn generate(&self, request: &ImageRequest, api_key: &str) -> Result<GeneratedImage>;
}

/// Compose the image prompt from a persona description and the user's idea.
/// Ordering and separator are fixed; callers and tests rely on the exact
/// `"{description} — {prompt}"` shape.
pub fn compose_image_prompt(description: &str, image_prompt: &str) -> String {
    format!("{description} — {image_prompt}")
}

/// Build an image request from a persona and the user's prompt.
///
/// Fails with `EmptyPrompt` for empty or whitespace-only input.
pub fn build_image_request(
    persona: &Persona,
    image_prompt: &str,
    size: ImageSize,
) -> Result<ImageRequest, DispatchError> {
    let image_prompt = image_prompt.trim();
    if image_prompt.is_empty() {
        return Err(DispatchError::EmptyPrompt);
    }

    Ok(ImageRequest {
        prompt: compose_image_prompt(&persona.description, image_prompt),
        size,
    })
}

/// Dispatcher for image requests
pub struct ImageDispatcher<S> {
    service: S,
}

impl<S: ImageService> ImageDispatcher<S> {
    pub fn new(service: S) -> Self {
        Self { service }
    }

    /// Send one request; credential checked before any network attempt.
    pub async fn send(
        &self,
        request: &ImageRequest,
        api_key: Option<&str>,
    ) -> Result<GeneratedImage, DispatchError> {
        let api_key = match api_key {
            Some(key) if !key.trim().is_empty() => key,
            _ => return Err(DispatchError::MissingCredential),
        };

        let request_id = Uuid::new_v4();
        info!(
            "[{request_id}] Dispatching image request | Size: {} | Prompt: '{}'",
            request.size.as_str(),
            request.prompt.chars().take(100).collect::<String>()
        );

        let image = self
            .service
            .generate(request, api_key)
            .await
            .map_err(DispatchError::service)?;

        debug!("[{request_id}] Image generated | URL length: {}", image.url.len());
        Ok(image)
    }
}

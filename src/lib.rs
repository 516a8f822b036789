// Core layer - configuration and error types
pub mod core;

// Features layer - all feature modules
pub mod features;

// TUI layer - terminal user interface (optional feature)
#[cfg(feature = "tui")]
pub mod tui;

// Re-export core config for convenience
pub use core::{Config, DispatchError};

// Re-export feature items
pub use features::{
    // Chat dispatch
    chat::{build_chat_request, ChatDispatcher, ChatRequest, CompletionService},
    // Image generation
    image_gen::{
        build_image_request, compose_image_prompt, GeneratedImage, ImageDispatcher, ImageRequest,
        ImageService, ImageSize,
    },
    // OpenAI client
    openai::OpenAiClient,
    // Personas
    personas::{is_valid_persona, Persona, PersonaRegistry, PERSONA_CHOICES},
};

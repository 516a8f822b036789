//! # Image Generation Feature
//!
//! Persona-flavored image creation with four output sizes.
//!
//! - **Version**: 1.0.0
//! - **Since**: 3.0.0
//! - **Toggleable**: true

pub mod generator;

pub use generator::{
    build_image_request, compose_image_prompt, GeneratedImage, ImageDispatcher, ImageRequest,
    ImageService, ImageSize,
};

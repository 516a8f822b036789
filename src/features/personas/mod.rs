//! # Personas Feature
//!
//! Five creative roles, each with a distinct system prompt that conditions
//! the tone of generated answers (director, dancer, stylist, actor, curator).
//!
//! - **Version**: 1.0.0
//! - **Since**: 1.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial release with the five creative personas

pub mod choices;
pub mod registry;

pub use choices::{is_valid_persona, PERSONA_CHOICES};
pub use registry::{Persona, PersonaRegistry};

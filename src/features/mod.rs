//! # Features Layer
//!
//! All feature modules: persona registry, chat dispatch, image generation,
//! and the OpenAI client that backs both service seams.

pub mod chat;
pub mod image_gen;
pub mod openai;
pub mod personas;

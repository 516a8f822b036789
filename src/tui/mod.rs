//! # TUI Module
//!
//! Terminal user interface: a tabbed form with a persona selector, prompt
//! inputs, and result panes for chat and image generation.
//!
//! - **Version**: 1.0.0
//! - **Since**: 3.0.0
//! - **Toggleable**: false
//!
//! ## Changelog
//! - 1.0.0: Initial TUI with chat, image, and help screens

pub mod app;
pub mod event;
pub mod ui;

pub use app::{App, Screen};
pub use event::{Event, EventHandler};

//! # TUI Application Core
//!
//! Main application state: the selected persona, the two prompt forms, and
//! the outcome of the last dispatch.

use crate::core::{Config, DispatchError};
use crate::features::chat::{build_chat_request, ChatRequest};
use crate::features::image_gen::{build_image_request, GeneratedImage, ImageRequest, ImageSize};
use crate::features::personas::{Persona, PersonaRegistry, PERSONA_CHOICES};

/// Available screens in the TUI
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    Chat,
    Image,
    Help,
}

impl Screen {
    pub fn title(&self) -> &'static str {
        match self {
            Screen::Chat => "Chat",
            Screen::Image => "Image",
            Screen::Help => "Help",
        }
    }

    pub fn key(&self) -> char {
        match self {
            Screen::Chat => '1',
            Screen::Image => '2',
            Screen::Help => '?',
        }
    }

    pub fn all() -> &'static [Screen] {
        &[Screen::Chat, Screen::Image, Screen::Help]
    }
}

/// Input mode for text entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Normal,
    Editing,
}

/// Which form field the current input edits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputField {
    /// The question on the chat tab
    #[default]
    Prompt,
    /// The image idea on the image tab
    ImagePrompt,
    /// The API credential (masked in the UI)
    ApiKey,
}

/// Main application state
pub struct App {
    pub config: Config,
    pub registry: PersonaRegistry,
    /// Current screen
    pub current_screen: Screen,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Index into PERSONA_CHOICES for the selector
    pub persona_index: usize,
    /// Credential, editable in the form; prefilled from the environment
    pub api_key: Option<String>,
    /// Question text on the chat tab
    pub chat_prompt: String,
    /// Image idea on the image tab
    pub image_prompt: String,
    /// Selected output size on the image tab
    pub image_size: ImageSize,
    /// Current input mode
    pub input_mode: InputMode,
    /// Field targeted by the current input
    pub input_field: InputField,
    /// Input buffer for text entry
    pub input_buffer: String,
    /// One request in flight at most; submissions while busy are ignored
    pub busy: bool,
    /// Last chat answer, shown until the next submission
    pub chat_result: Option<String>,
    /// Last generated image, shown until the next submission
    pub image_result: Option<GeneratedImage>,
    /// Error message to display
    pub error_message: Option<String>,
    /// Status message to display
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let api_key = config.openai_api_key.clone();
        App {
            config,
            registry: PersonaRegistry::new(),
            current_screen: Screen::Chat,
            should_quit: false,
            persona_index: 0,
            api_key,
            chat_prompt: String::new(),
            image_prompt: String::new(),
            image_size: ImageSize::default(),
            input_mode: InputMode::Normal,
            input_field: InputField::default(),
            input_buffer: String::new(),
            busy: false,
            chat_result: None,
            image_result: None,
            error_message: None,
            status_message: None,
        }
    }

    /// Switch to a different screen
    pub fn switch_screen(&mut self, screen: Screen) {
        self.current_screen = screen;
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    pub fn selected_persona_id(&self) -> &'static str {
        PERSONA_CHOICES[self.persona_index % PERSONA_CHOICES.len()].1
    }

    pub fn selected_persona(&self) -> Result<&Persona, DispatchError> {
        self.registry.lookup(self.selected_persona_id())
    }

    pub fn next_persona(&mut self) {
        self.persona_index = (self.persona_index + 1) % PERSONA_CHOICES.len();
    }

    pub fn prev_persona(&mut self) {
        self.persona_index =
            (self.persona_index + PERSONA_CHOICES.len() - 1) % PERSONA_CHOICES.len();
    }

    /// Begin editing a field, seeding the buffer with its current value
    pub fn start_input(&mut self, field: InputField) {
        self.input_field = field;
        self.input_mode = InputMode::Editing;
        self.input_buffer = match field {
            InputField::Prompt => self.chat_prompt.clone(),
            InputField::ImagePrompt => self.image_prompt.clone(),
            InputField::ApiKey => String::new(), // never echo the stored key
        };
    }

    pub fn cancel_input(&mut self) {
        self.input_mode = InputMode::Normal;
        self.input_buffer.clear();
    }

    /// Commit the buffer into the targeted field
    pub fn commit_input(&mut self) {
        let value = std::mem::take(&mut self.input_buffer);
        match self.input_field {
            InputField::Prompt => self.chat_prompt = value,
            InputField::ImagePrompt => self.image_prompt = value,
            InputField::ApiKey => {
                // Empty submit keeps the existing key
                if !value.trim().is_empty() {
                    self.api_key = Some(value);
                    self.status_message = Some("API key updated".to_string());
                }
            }
        }
        self.input_mode = InputMode::Normal;
    }

    /// Validate the chat form and produce a request for dispatch.
    /// Returns None (with the error displayed) when validation fails or a
    /// request is already in flight.
    pub fn begin_chat(&mut self) -> Option<ChatRequest> {
        if self.busy {
            return None;
        }
        self.error_message = None;

        let request = self.selected_persona().and_then(|persona| {
            build_chat_request(
                persona,
                &self.chat_prompt,
                self.config.temperature,
                self.config.max_tokens,
            )
        });

        match request {
            Ok(request) => {
                self.busy = true;
                self.chat_result = None;
                self.status_message = Some("Generating response...".to_string());
                Some(request)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                None
            }
        }
    }

    /// Validate the image form and produce a request for dispatch
    pub fn begin_image(&mut self) -> Option<ImageRequest> {
        if self.busy {
            return None;
        }
        self.error_message = None;

        let request = self
            .selected_persona()
            .and_then(|persona| build_image_request(persona, &self.image_prompt, self.image_size));

        match request {
            Ok(request) => {
                self.busy = true;
                self.image_result = None;
                self.status_message = Some("Generating image...".to_string());
                Some(request)
            }
            Err(e) => {
                self.error_message = Some(e.to_string());
                None
            }
        }
    }

    /// Record the outcome of a chat dispatch
    pub fn finish_chat(&mut self, outcome: Result<String, DispatchError>) {
        self.busy = false;
        self.status_message = None;
        match outcome {
            Ok(text) => self.chat_result = Some(text),
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }

    /// Record the outcome of an image dispatch
    pub fn finish_image(&mut self, outcome: Result<GeneratedImage, DispatchError>) {
        self.busy = false;
        self.status_message = None;
        match outcome {
            Ok(image) => self.image_result = Some(image),
            Err(e) => self.error_message = Some(e.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_app() -> App {
        App::new(Config::default())
    }

    #[test]
    fn test_persona_cycling_wraps() {
        let mut app = test_app();
        assert_eq!(app.selected_persona_id(), "director");

        app.prev_persona();
        assert_eq!(app.selected_persona_id(), "curator");

        app.next_persona();
        assert_eq!(app.selected_persona_id(), "director");
    }

    #[test]
    fn test_begin_chat_requires_prompt() {
        let mut app = test_app();
        app.api_key = Some("sk-test".to_string());

        assert!(app.begin_chat().is_none());
        assert!(app.error_message.as_deref().unwrap_or("").contains("empty"));
        assert!(!app.busy);
    }

    #[test]
    fn test_begin_chat_sets_busy_and_binds_persona() {
        let mut app = test_app();
        app.api_key = Some("sk-test".to_string());
        app.chat_prompt = "How do I frame a sunset?".to_string();

        let request = app.begin_chat().expect("valid form should build");
        assert!(app.busy);
        assert!(app.chat_result.is_none());

        let director = app.registry.lookup("director").unwrap();
        assert_eq!(request.system_prompt, director.system_prompt);
    }

    #[test]
    fn test_begin_chat_ignored_while_busy() {
        let mut app = test_app();
        app.api_key = Some("sk-test".to_string());
        app.chat_prompt = "hello".to_string();

        assert!(app.begin_chat().is_some());
        assert!(app.begin_chat().is_none(), "second submit while busy must be ignored");
    }

    #[test]
    fn test_switching_persona_rebinds_instruction() {
        let mut app = test_app();
        app.api_key = Some("sk-test".to_string());
        app.chat_prompt = "same question".to_string();

        let first = app.begin_chat().unwrap();
        app.finish_chat(Ok("answer".to_string()));

        app.next_persona();
        let second = app.begin_chat().unwrap();

        assert_ne!(first.system_prompt, second.system_prompt);
    }

    #[test]
    fn test_finish_chat_records_error() {
        let mut app = test_app();
        app.busy = true;
        app.finish_chat(Err(DispatchError::MissingCredential));

        assert!(!app.busy);
        assert!(app.chat_result.is_none());
        assert!(app.error_message.as_deref().unwrap().contains("API key"));
    }

    #[test]
    fn test_api_key_edit_never_seeds_buffer() {
        let mut app = test_app();
        app.api_key = Some("sk-secret".to_string());

        app.start_input(InputField::ApiKey);
        assert!(app.input_buffer.is_empty());

        // Submitting an empty buffer keeps the old key
        app.commit_input();
        assert_eq!(app.api_key.as_deref(), Some("sk-secret"));
    }

    #[test]
    fn test_begin_image_composes_prompt() {
        let mut app = test_app();
        app.api_key = Some("sk-test".to_string());
        app.image_prompt = "red dress".to_string();
        app.persona_index = 2; // stylist

        let request = app.begin_image().expect("valid form should build");
        assert!(request.prompt.ends_with("— red dress"));
        assert!(request.prompt.starts_with("You coordinate outfits"));
    }
}

//! # TUI Event Handling
//!
//! Keyboard input, tick events, and dispatch outcomes delivered over one
//! channel so the render loop stays single-threaded.

use crate::core::DispatchError;
use crate::features::image_gen::GeneratedImage;
use crossterm::event::{self, Event as CrosstermEvent, KeyCode, KeyEvent, KeyModifiers};
use std::time::Duration;
use tokio::sync::mpsc;

/// TUI events
#[derive(Debug)]
pub enum Event {
    /// Keyboard input
    Key(KeyEvent),
    /// Terminal resize
    Resize(u16, u16),
    /// Tick for periodic updates
    Tick,
    /// A chat dispatch finished
    Chat(Result<String, DispatchError>),
    /// An image dispatch finished
    Image(Result<GeneratedImage, DispatchError>),
}

/// Event handler that combines keyboard, tick, and dispatch events
pub struct EventHandler {
    rx: mpsc::UnboundedReceiver<Event>,
}

impl EventHandler {
    /// Create a new event handler. The returned sender is cloned into
    /// dispatch tasks so outcomes arrive as events.
    pub fn new(tick_rate: Duration) -> (Self, mpsc::UnboundedSender<Event>) {
        let (tx, rx) = mpsc::unbounded_channel();

        // Spawn keyboard event handler
        let key_tx = tx.clone();
        std::thread::spawn(move || {
            loop {
                if event::poll(tick_rate).unwrap_or(false) {
                    match event::read() {
                        Ok(CrosstermEvent::Key(key)) => {
                            if key_tx.send(Event::Key(key)).is_err() {
                                break;
                            }
                        }
                        Ok(CrosstermEvent::Resize(w, h)) => {
                            if key_tx.send(Event::Resize(w, h)).is_err() {
                                break;
                            }
                        }
                        _ => {}
                    }
                } else {
                    // Send tick on poll timeout
                    if key_tx.send(Event::Tick).is_err() {
                        break;
                    }
                }
            }
        });

        (EventHandler { rx }, tx)
    }

    /// Receive the next event
    pub async fn next(&mut self) -> Option<Event> {
        self.rx.recv().await
    }
}

/// Key action result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// No action
    None,
    /// Quit the application
    Quit,
    /// Switch to screen
    SwitchScreen(crate::tui::Screen),
    /// Move persona selection up
    Up,
    /// Move persona selection down
    Down,
    /// Submit the current form
    Submit,
    /// Start editing the prompt field
    StartPromptInput,
    /// Start editing the API key field
    StartKeyInput,
    /// Commit text input
    SubmitInput,
    /// Cancel text input
    CancelInput,
    /// Character input
    Char(char),
    /// Backspace
    Backspace,
    /// Cycle image size left
    SizeLeft,
    /// Cycle image size right
    SizeRight,
}

/// Map a key event to an action
pub fn map_key_event(key: KeyEvent, in_edit_mode: bool) -> KeyAction {
    if in_edit_mode {
        // In edit mode, handle text input
        match key.code {
            KeyCode::Esc => KeyAction::CancelInput,
            KeyCode::Enter => KeyAction::SubmitInput,
            KeyCode::Backspace => KeyAction::Backspace,
            KeyCode::Char(c) => KeyAction::Char(c),
            _ => KeyAction::None,
        }
    } else {
        // Normal mode navigation
        match (key.code, key.modifiers) {
            // Quit
            (KeyCode::Char('q'), KeyModifiers::NONE) => KeyAction::Quit,
            (KeyCode::Char('c'), KeyModifiers::CONTROL) => KeyAction::Quit,

            // Screen switching
            (KeyCode::Char('1'), KeyModifiers::NONE) => {
                KeyAction::SwitchScreen(crate::tui::Screen::Chat)
            }
            (KeyCode::Char('2'), KeyModifiers::NONE) => {
                KeyAction::SwitchScreen(crate::tui::Screen::Image)
            }
            (KeyCode::Char('?'), KeyModifiers::NONE) => {
                KeyAction::SwitchScreen(crate::tui::Screen::Help)
            }

            // Persona selection
            (KeyCode::Up, _) | (KeyCode::Char('k'), KeyModifiers::NONE) => KeyAction::Up,
            (KeyCode::Down, _) | (KeyCode::Char('j'), KeyModifiers::NONE) => KeyAction::Down,

            // Submit the form
            (KeyCode::Enter, _) => KeyAction::Submit,

            // Text input
            (KeyCode::Char('i'), KeyModifiers::NONE) => KeyAction::StartPromptInput,
            (KeyCode::Char('/'), KeyModifiers::NONE) => KeyAction::StartPromptInput,
            (KeyCode::Char('a'), KeyModifiers::NONE) => KeyAction::StartKeyInput,

            // Image size cycling
            (KeyCode::Left, KeyModifiers::NONE) | (KeyCode::Char('h'), KeyModifiers::NONE) => {
                KeyAction::SizeLeft
            }
            (KeyCode::Right, KeyModifiers::NONE) | (KeyCode::Char('l'), KeyModifiers::NONE) => {
                KeyAction::SizeRight
            }

            _ => KeyAction::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn key(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn test_normal_mode_mapping() {
        assert_eq!(
            map_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), false),
            KeyAction::Quit
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('2'), KeyModifiers::NONE), false),
            KeyAction::SwitchScreen(crate::tui::Screen::Image)
        );
        assert_eq!(
            map_key_event(key(KeyCode::Enter, KeyModifiers::NONE), false),
            KeyAction::Submit
        );
        assert_eq!(
            map_key_event(key(KeyCode::Char('a'), KeyModifiers::NONE), false),
            KeyAction::StartKeyInput
        );
    }

    #[test]
    fn test_edit_mode_captures_characters() {
        assert_eq!(
            map_key_event(key(KeyCode::Char('q'), KeyModifiers::NONE), true),
            KeyAction::Char('q')
        );
        assert_eq!(
            map_key_event(key(KeyCode::Enter, KeyModifiers::NONE), true),
            KeyAction::SubmitInput
        );
        assert_eq!(
            map_key_event(key(KeyCode::Esc, KeyModifiers::NONE), true),
            KeyAction::CancelInput
        );
    }
}

//! # Muse Studio
//!
//! Terminal form for persona-conditioned chat and image generation.
//!
//! Usage: `cargo run --bin muse`

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use dotenvy::dotenv;
use log::{error, info};
use ratatui::prelude::*;
use std::io;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;

use muse::core::{Config, DispatchError};
use muse::features::chat::{ChatDispatcher, ChatRequest};
use muse::features::image_gen::{GeneratedImage, ImageDispatcher, ImageRequest};
use muse::features::openai::OpenAiClient;
use muse::tui::app::{InputField, InputMode};
use muse::tui::event::{map_key_event, KeyAction};
use muse::tui::{App, Event, EventHandler, Screen};

/// TUI refresh rate
const TICK_RATE: Duration = Duration::from_millis(250);

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    // Initialize logging
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    info!("Starting Muse Studio...");

    let config = Config::from_env();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app state and event handler
    let mut app = App::new(config);
    let (mut events, event_tx) = EventHandler::new(TICK_RATE);

    // Main loop
    let result = run_app(&mut terminal, &mut app, &mut events, &event_tx).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(e) = result {
        error!("Application error: {}", e);
        return Err(e);
    }

    info!("Muse Studio shutdown complete");
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &mut EventHandler,
    event_tx: &UnboundedSender<Event>,
) -> Result<()> {
    loop {
        terminal.draw(|frame| muse::tui::ui::render(frame, app))?;

        let Some(event) = events.next().await else {
            return Ok(());
        };

        match event {
            Event::Key(key) => {
                let action = map_key_event(key, app.input_mode == InputMode::Editing);
                handle_action(app, action, event_tx);
            }
            Event::Chat(outcome) => app.finish_chat(outcome),
            Event::Image(outcome) => app.finish_image(outcome),
            Event::Resize(_, _) | Event::Tick => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_action(app: &mut App, action: KeyAction, event_tx: &UnboundedSender<Event>) {
    match action {
        KeyAction::Quit => app.should_quit = true,
        KeyAction::SwitchScreen(screen) => app.switch_screen(screen),
        KeyAction::Up => app.prev_persona(),
        KeyAction::Down => app.next_persona(),
        KeyAction::StartPromptInput => {
            let field = match app.current_screen {
                Screen::Image => InputField::ImagePrompt,
                _ => InputField::Prompt,
            };
            app.start_input(field);
        }
        KeyAction::StartKeyInput => app.start_input(InputField::ApiKey),
        KeyAction::SubmitInput => app.commit_input(),
        KeyAction::CancelInput => app.cancel_input(),
        KeyAction::Char(c) => app.input_buffer.push(c),
        KeyAction::Backspace => {
            app.input_buffer.pop();
        }
        KeyAction::SizeLeft => {
            if app.current_screen == Screen::Image {
                app.image_size = app.image_size.prev();
            }
        }
        KeyAction::SizeRight => {
            if app.current_screen == Screen::Image {
                app.image_size = app.image_size.next();
            }
        }
        KeyAction::Submit => submit(app, event_tx),
        KeyAction::None => {}
    }
}

/// Validate the active form and spawn one dispatch task. The outcome comes
/// back through the event channel; submissions while busy are ignored by
/// `begin_chat`/`begin_image`.
fn submit(app: &mut App, event_tx: &UnboundedSender<Event>) {
    match app.current_screen {
        Screen::Chat => {
            if let Some(request) = app.begin_chat() {
                spawn_chat(app, request, event_tx.clone());
            }
        }
        Screen::Image => {
            if let Some(request) = app.begin_image() {
                spawn_image(app, request, event_tx.clone());
            }
        }
        Screen::Help => {}
    }
}

fn spawn_chat(app: &App, request: ChatRequest, tx: UnboundedSender<Event>) {
    let config = app.config.clone();
    let api_key = app.api_key.clone();
    tokio::spawn(async move {
        let outcome = dispatch_chat(&config, &request, api_key.as_deref()).await;
        let _ = tx.send(Event::Chat(outcome));
    });
}

fn spawn_image(app: &App, request: ImageRequest, tx: UnboundedSender<Event>) {
    let config = app.config.clone();
    let api_key = app.api_key.clone();
    tokio::spawn(async move {
        let outcome = dispatch_image(&config, &request, api_key.as_deref()).await;
        let _ = tx.send(Event::Image(outcome));
    });
}

async fn dispatch_chat(
    config: &Config,
    request: &ChatRequest,
    api_key: Option<&str>,
) -> Result<String, DispatchError> {
    let client = OpenAiClient::new(config).map_err(DispatchError::service)?;
    ChatDispatcher::new(client).send(request, api_key).await
}

async fn dispatch_image(
    config: &Config,
    request: &ImageRequest,
    api_key: Option<&str>,
) -> Result<GeneratedImage, DispatchError> {
    let client = OpenAiClient::new(config).map_err(DispatchError::service)?;
    ImageDispatcher::new(client).send(request, api_key).await
}

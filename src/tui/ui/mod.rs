//! # TUI UI Components
//!
//! Ratatui-based rendering for each screen.

mod chat;
mod help;
mod image;

pub use chat::render_chat;
pub use help::render_help;
pub use image::render_image;

use crate::tui::app::InputMode;
use crate::tui::{App, Screen};
use ratatui::prelude::*;
use ratatui::widgets::{Block, Borders, Paragraph, Tabs};

/// Main render function - dispatches to screen-specific renderers
pub fn render(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Tab bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_tabs(frame, app, chunks[0]);

    match app.current_screen {
        Screen::Chat => render_chat(frame, app, chunks[1]),
        Screen::Image => render_image(frame, app, chunks[1]),
        Screen::Help => render_help(frame, app, chunks[1]),
    }

    render_status_bar(frame, app, chunks[2]);
}

/// Render the tab bar
fn render_tabs(frame: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Screen::all()
        .iter()
        .map(|s| {
            let style = if *s == app.current_screen {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::White)
            };
            Line::from(format!("[{}] {}", s.key(), s.title())).style(style)
        })
        .collect();

    let tabs = Tabs::new(titles)
        .block(Block::default().borders(Borders::ALL).title(" Muse Studio "))
        .select(
            Screen::all()
                .iter()
                .position(|s| *s == app.current_screen)
                .unwrap_or(0),
        )
        .style(Style::default().fg(Color::White))
        .highlight_style(Style::default().fg(Color::Yellow));

    frame.render_widget(tabs, area);
}

/// Render the status bar
fn render_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let key_status = if app.api_key.is_some() {
        Span::styled("● Key set", Style::default().fg(Color::Green))
    } else {
        Span::styled("● No API key", Style::default().fg(Color::Red))
    };

    let busy_status = if app.busy {
        Span::styled(
            " [WORKING] ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )
    } else {
        Span::raw("")
    };

    let mode_status = match app.input_mode {
        InputMode::Normal => Span::raw(""),
        InputMode::Editing => Span::styled(
            " [EDITING] ",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
    };

    let message = if let Some(err) = &app.error_message {
        Span::styled(format!(" Error: {err} "), Style::default().fg(Color::Red))
    } else if let Some(status) = &app.status_message {
        Span::styled(format!(" {status} "), Style::default().fg(Color::Green))
    } else {
        Span::raw("")
    };

    let help_hint = Span::styled(
        " q:Quit i:Prompt a:Key Enter:Send ?:Help ",
        Style::default().fg(Color::DarkGray),
    );

    let status_line = Line::from(vec![
        key_status,
        Span::raw(" | "),
        busy_status,
        mode_status,
        message,
        Span::raw(" "),
        help_hint,
    ]);

    let paragraph = Paragraph::new(status_line).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Helper to create a block with title
pub fn titled_block(title: &str) -> Block {
    Block::default().borders(Borders::ALL).title(format!(" {title} "))
}

/// Convert a persona accent color (0xRRGGBB) to a terminal color
pub fn accent_color(color: u32) -> Color {
    Color::Rgb(
        ((color >> 16) & 0xFF) as u8,
        ((color >> 8) & 0xFF) as u8,
        (color & 0xFF) as u8,
    )
}

/// Mask a credential for display; only presence is shown, never content
pub fn mask_key(key: Option<&str>) -> String {
    match key {
        Some(_) => "••••••••".to_string(),
        None => "(not set - press 'a')".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_color_splits_channels() {
        assert_eq!(accent_color(0xE91E63), Color::Rgb(0xE9, 0x1E, 0x63));
    }

    #[test]
    fn test_mask_key_never_reveals() {
        let masked = mask_key(Some("sk-very-secret"));
        assert!(!masked.contains("secret"));
        assert!(mask_key(None).contains("not set"));
    }
}

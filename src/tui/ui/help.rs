//! Help screen with key bindings.

use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

use super::titled_block;
use crate::tui::App;

pub fn render_help(frame: &mut Frame, _app: &App, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "Muse Studio",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from("Pick a creative persona, ask a question, or generate an image."),
        Line::from(""),
        Line::from("  1          Chat tab"),
        Line::from("  2          Image tab"),
        Line::from("  ?          This help"),
        Line::from(""),
        Line::from("  ↑/↓  k/j   Select persona"),
        Line::from("  i or /     Edit the prompt"),
        Line::from("  a          Enter your API key (masked, kept in memory only)"),
        Line::from("  ←/→  h/l   Cycle image size (image tab)"),
        Line::from("  Enter      Send the request"),
        Line::from("  Esc        Cancel editing"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from(Span::styled(
            "One request runs at a time; the status bar shows [WORKING] while it does.",
            Style::default().fg(Color::DarkGray),
        )),
        Line::from(Span::styled(
            "Errors are shown in the status bar; fix the input and press Enter again.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let help = Paragraph::new(lines).block(titled_block("Help"));
    frame.render_widget(help, area);
}

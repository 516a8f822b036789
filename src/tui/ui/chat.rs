//! Chat screen: persona selector, question form, and the answer pane.

use ratatui::prelude::*;
use ratatui::widgets::{List, ListItem, ListState, Paragraph, Wrap};

use super::{accent_color, mask_key, titled_block};
use crate::tui::app::{InputField, InputMode};
use crate::tui::App;
use crate::PERSONA_CHOICES;

pub fn render_chat(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    render_persona_list(frame, app, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Question input
            Constraint::Length(3), // API key
            Constraint::Min(0),    // Answer
        ])
        .split(columns[1]);

    render_prompt_field(frame, app, rows[0]);
    render_key_field(frame, app, rows[1]);
    render_answer(frame, app, rows[2]);
}

/// Persona selector, shared with the image screen
pub fn render_persona_list(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = PERSONA_CHOICES
        .iter()
        .map(|(name, id)| {
            let description = app
                .registry
                .get(id)
                .map(|p| p.description.clone())
                .unwrap_or_default();
            ListItem::new(vec![
                Line::from(Span::styled(
                    *name,
                    Style::default().add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    description,
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();

    let mut state = ListState::default();
    state.select(Some(app.persona_index));

    let list = List::new(items)
        .block(titled_block("Persona (↑/↓)"))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("▶ ");

    frame.render_stateful_widget(list, area, &mut state);
}

fn render_prompt_field(frame: &mut Frame, app: &App, area: Rect) {
    let editing =
        app.input_mode == InputMode::Editing && app.input_field == InputField::Prompt;
    let text = if editing {
        format!("{}_", app.input_buffer)
    } else if app.chat_prompt.is_empty() {
        "e.g. How can I create impressive artwork?".to_string()
    } else {
        app.chat_prompt.clone()
    };

    let style = if editing {
        Style::default().fg(Color::Cyan)
    } else if app.chat_prompt.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let field = Paragraph::new(text)
        .style(style)
        .block(titled_block("Your question (i)"));
    frame.render_widget(field, area);
}

/// API key field, shared with the image screen. Shows only presence.
pub fn render_key_field(frame: &mut Frame, app: &App, area: Rect) {
    let editing =
        app.input_mode == InputMode::Editing && app.input_field == InputField::ApiKey;
    let text = if editing {
        // Mask while typing too
        format!("{}_", "•".repeat(app.input_buffer.chars().count()))
    } else {
        mask_key(app.api_key.as_deref())
    };

    let style = if editing {
        Style::default().fg(Color::Cyan)
    } else if app.api_key.is_none() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Green)
    };

    let field = Paragraph::new(text)
        .style(style)
        .block(titled_block("API key (a)"));
    frame.render_widget(field, area);
}

fn render_answer(frame: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.selected_persona() {
        Ok(persona) => (format!("{} says", persona.name), accent_color(persona.color)),
        Err(_) => ("Answer".to_string(), Color::White),
    };

    let body = if app.busy {
        "Generating response...".to_string()
    } else {
        app.chat_result
            .clone()
            .unwrap_or_else(|| "Press Enter to ask the selected persona.".to_string())
    };

    let answer = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(titled_block(&title).border_style(Style::default().fg(color)));
    frame.render_widget(answer, area);
}

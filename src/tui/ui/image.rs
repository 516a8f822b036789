//! Image screen: persona selector, image idea form, size selector, and the
//! generated image URL pane.

use ratatui::prelude::*;
use ratatui::widgets::{Paragraph, Wrap};

use super::chat::{render_key_field, render_persona_list};
use super::{accent_color, titled_block};
use crate::features::image_gen::ImageSize;
use crate::tui::app::{InputField, InputMode};
use crate::tui::App;

pub fn render_image(frame: &mut Frame, app: &App, area: Rect) {
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(30), Constraint::Min(0)])
        .split(area);

    render_persona_list(frame, app, columns[0]);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Image prompt input
            Constraint::Length(3), // Size selector
            Constraint::Length(3), // API key
            Constraint::Min(0),    // Result
        ])
        .split(columns[1]);

    render_image_prompt_field(frame, app, rows[0]);
    render_size_selector(frame, app, rows[1]);
    render_key_field(frame, app, rows[2]);
    render_result(frame, app, rows[3]);
}

fn render_image_prompt_field(frame: &mut Frame, app: &App, area: Rect) {
    let editing =
        app.input_mode == InputMode::Editing && app.input_field == InputField::ImagePrompt;
    let text = if editing {
        format!("{}_", app.input_buffer)
    } else if app.image_prompt.is_empty() {
        "e.g. red dress for a gallery opening".to_string()
    } else {
        app.image_prompt.clone()
    };

    let style = if editing {
        Style::default().fg(Color::Cyan)
    } else if app.image_prompt.is_empty() {
        Style::default().fg(Color::DarkGray)
    } else {
        Style::default()
    };

    let field = Paragraph::new(text)
        .style(style)
        .block(titled_block("Image idea (i)"));
    frame.render_widget(field, area);
}

fn render_size_selector(frame: &mut Frame, app: &App, area: Rect) {
    let spans: Vec<Span> = ImageSize::all()
        .iter()
        .flat_map(|size| {
            let style = if *size == app.image_size {
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Color::DarkGray)
            };
            [Span::styled(size.label(), style), Span::raw("  ")]
        })
        .collect();

    let selector = Paragraph::new(Line::from(spans)).block(titled_block("Size (←/→)"));
    frame.render_widget(selector, area);
}

fn render_result(frame: &mut Frame, app: &App, area: Rect) {
    let (title, color) = match app.selected_persona() {
        Ok(persona) => (
            format!("{} imagines", persona.name),
            accent_color(persona.color),
        ),
        Err(_) => ("Image".to_string(), Color::White),
    };

    let body: Vec<Line> = if app.busy {
        vec![Line::from("Generating image...")]
    } else if let Some(image) = &app.image_result {
        let mut lines = vec![
            Line::from(Span::styled(
                "Open this URL to view the image:",
                Style::default().fg(Color::DarkGray),
            )),
            Line::from(image.url.clone()),
        ];
        if let Some(revised) = &image.revised_prompt {
            lines.push(Line::from(""));
            lines.push(Line::from(Span::styled(
                format!("Revised prompt: {revised}"),
                Style::default().fg(Color::DarkGray),
            )));
        }
        lines
    } else {
        vec![Line::from(
            "Press Enter to generate an image in this persona's domain.",
        )]
    };

    let result = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .block(titled_block(&title).border_style(Style::default().fg(color)));
    frame.render_widget(result, area);
}

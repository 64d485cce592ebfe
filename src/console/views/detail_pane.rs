use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::console::app::{App, Focus};
use crate::console::view;
use crate::resolver::InputSpec;
use crate::session::Outcome;

pub(super) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let inner = view::pane(frame, "Command", area);
    let mut lines: Vec<Line> = Vec::new();

    match app.selected_command() {
        Some(command) => {
            let mut title = vec![Span::styled(
                command.name.clone(),
                Style::default().add_modifier(Modifier::BOLD),
            )];
            if command.dangerous {
                title.push(Span::styled(
                    "  DANGEROUS",
                    Style::default()
                        .fg(Color::Red)
                        .add_modifier(Modifier::BOLD),
                ));
            }
            lines.push(Line::from(title));
            lines.push(Line::styled(
                command.description.clone(),
                Style::default().fg(Color::Gray),
            ));
            lines.push(Line::raw(""));

            for (ix, param) in command.params.iter().enumerate() {
                lines.push(param_line(app, ix, param));
                if let Some(note) = param_note(app, ix) {
                    lines.push(note);
                }
            }

            if let Some(text) =
                crate::preview::preview(&command.key, app.session.values(), &app.cache)
            {
                lines.push(Line::raw(""));
                lines.push(Line::styled(
                    format!("Preview: {}", text),
                    Style::default().fg(Color::Yellow),
                ));
            }
        }
        None => {
            lines.push(Line::styled(
                "Select a command from the list.",
                Style::default().fg(Color::DarkGray),
            ));
        }
    }

    if let Some(outcome) = app.session.outcome() {
        lines.push(Line::raw(""));
        let (text, color) = match outcome {
            Outcome::Success(msg) => (format!("✓ {}", msg), Color::Green),
            Outcome::Failure(msg) => (format!("✗ {}", msg), Color::Red),
        };
        lines.push(Line::styled(text, Style::default().fg(color)));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

fn param_line(app: &App, ix: usize, param: &crate::model::ParamSpec) -> Line<'static> {
    let is_cursor = app.focus == Focus::Params && ix == app.param_cursor;
    let marker = if is_cursor { "›" } else { " " };
    let required = if param.required { "*" } else { " " };

    let mut name_style = Style::default();
    if is_cursor {
        name_style = name_style.add_modifier(Modifier::BOLD);
    }

    let value_span = if is_cursor && app.editing.is_some() {
        let input = app.editing.as_ref().map(|i| i.buf.clone()).unwrap_or_default();
        Span::styled(
            format!("{}▏", input),
            Style::default().fg(Color::White).bg(Color::DarkGray),
        )
    } else {
        match app.session.value(&param.name) {
            Some(value) => {
                let shown = match app.session.label_for(&param.name) {
                    Some(label) => format!("{} ({})", label, value),
                    None => value.to_string(),
                };
                Span::styled(shown, Style::default().fg(Color::White))
            }
            None => {
                let hint = param
                    .placeholder
                    .clone()
                    .unwrap_or_else(|| "—".to_string());
                Span::styled(hint, Style::default().fg(Color::DarkGray))
            }
        }
    };

    Line::from(vec![
        Span::raw(format!("{} ", marker)),
        Span::styled(format!("{}{}: ", param.name, required), name_style),
        value_span,
    ])
}

/// Per-parameter status line: blocking placeholder, in-flight load, or a
/// failed load with its message.
fn param_note(app: &App, ix: usize) -> Option<Line<'static>> {
    let (_, spec) = app.param_spec(ix)?;
    if spec == InputSpec::AwaitingPlayer {
        return Some(Line::styled(
            "    pick a player first",
            Style::default().fg(Color::DarkGray),
        ));
    }
    let key = spec.collection()?;
    if app.cache.is_loading(&key) {
        return Some(Line::styled(
            format!("    loading {}…", key.label()),
            Style::default().fg(Color::Gray),
        ));
    }
    if let Some(msg) = app.cache.failure(&key) {
        return Some(Line::styled(
            format!("    {} unavailable: {}", key.label(), msg),
            Style::default().fg(Color::Red),
        ));
    }
    None
}

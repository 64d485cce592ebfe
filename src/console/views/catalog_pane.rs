use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::catalog::classify;
use crate::console::app::{App, Focus};
use crate::console::view;

pub(super) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let title = format!("Commands [{}]", app.category.label());
    let inner = view::pane(frame, &title, area);

    if app.catalog_pending {
        frame.render_widget(
            Paragraph::new("Loading commands…").style(Style::default().fg(Color::Gray)),
            inner,
        );
        return;
    }
    if let Some(err) = &app.catalog_error {
        frame.render_widget(
            Paragraph::new(format!("Command list unavailable: {}", err))
                .style(Style::default().fg(Color::Red)),
            inner,
        );
        return;
    }

    let mut lines: Vec<Line> = Vec::new();
    let mut flat_ix = 0usize;
    // Headings render only for non-empty buckets.
    for (level, bucket) in app.catalog.grouped(app.category) {
        lines.push(Line::styled(
            format!("— {} —", level.label()),
            Style::default().fg(Color::Cyan),
        ));
        for cmd in bucket {
            let is_cursor = flat_ix == app.cursor;
            let mut style = Style::default();
            if cmd.dangerous {
                style = style.fg(Color::Red);
            }
            if is_cursor {
                style = style.bg(Color::DarkGray);
                if app.focus == Focus::Commands {
                    style = style.add_modifier(Modifier::BOLD);
                }
            }
            let selected = app.session.selected() == Some(cmd.key.as_str());
            let marker = if selected { "▸" } else { " " };
            let danger = if cmd.dangerous { " !" } else { "" };
            lines.push(Line::from(vec![
                Span::raw(format!("{} ", marker)),
                Span::styled(format!("{}{}", cmd.name, danger), style),
                Span::styled(
                    format!("  {}", classify(&cmd.key).label().to_lowercase()),
                    Style::default().fg(Color::DarkGray),
                ),
            ]));
            flat_ix += 1;
        }
    }
    if lines.is_empty() {
        lines.push(Line::styled(
            "No commands available.",
            Style::default().fg(Color::DarkGray),
        ));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph};

use crate::cache::CollectionKey;
use crate::console::app::App;
use crate::console::view;

pub(super) fn render(frame: &mut ratatui::Frame, host: Rect, app: &App) {
    let Some(picker) = app.picker.as_ref() else {
        return;
    };

    let area = view::centered(host, 70, 20);
    frame.render_widget(Clear, area);

    let mut title = picker.key.label().to_string();
    if picker.key == CollectionKey::Items {
        let rarity = picker.rarity_filter().unwrap_or("any rarity");
        let slot = picker.slot_filter().unwrap_or("any slot");
        title = format!("{} [{} · {}]", title, rarity, slot);
    }
    let inner = view::pane(frame, &title, area);

    let mut lines: Vec<Line> = vec![
        Line::from(vec![
            Span::styled("filter: ", Style::default().fg(Color::DarkGray)),
            Span::raw(picker.query.buf.clone()),
            Span::styled("▏", Style::default().fg(Color::Gray)),
        ]),
        Line::raw(""),
    ];

    if app.cache.is_loading(&picker.key) {
        lines.push(Line::styled(
            format!("Loading {}…", picker.key.label()),
            Style::default().fg(Color::Gray),
        ));
    } else if let Some(msg) = app.cache.failure(&picker.key) {
        lines.push(Line::styled(
            format!("Load failed: {}", msg),
            Style::default().fg(Color::Red),
        ));
    } else if let Some(collection) = app.cache.loaded(&picker.key) {
        let rows = picker.rows(collection);
        if rows.is_empty() {
            lines.push(Line::styled(
                "No matches.",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            // Keep the selected row inside the visible window.
            let visible = inner.height.saturating_sub(2).max(1) as usize;
            let first = picker.selected.saturating_sub(visible.saturating_sub(1));
            for (ix, row) in rows.iter().enumerate().skip(first).take(visible) {
                let mut style = Style::default();
                if ix == picker.selected {
                    style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                }
                lines.push(Line::from(vec![
                    Span::styled(row.label.clone(), style),
                    Span::styled(
                        format!("  {}", row.detail),
                        Style::default().fg(Color::DarkGray),
                    ),
                ]));
            }
        }
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Wrap};

use crate::console::view;

pub(super) fn checking(frame: &mut ratatui::Frame, area: Rect) {
    let inner = view::pane(frame, "Operator Console", area);
    frame.render_widget(
        Paragraph::new("Checking operator access…").style(Style::default().fg(Color::Gray)),
        inner,
    );
}

pub(super) fn denied(frame: &mut ratatui::Frame, area: Rect, reason: &str) {
    let inner = view::pane(frame, "Operator Console", area);
    let lines = vec![
        Line::styled(
            "Access denied",
            Style::default()
                .fg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
        Line::raw(""),
        Line::raw(reason.to_string()),
        Line::raw(""),
        Line::styled("Press q to exit.", Style::default().fg(Color::DarkGray)),
    ];
    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use super::app::{App, Focus, Gate};

mod catalog_pane;
mod detail_pane;
mod gate;
mod picker_view;
mod wizard_view;

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();

    match &app.gate {
        Gate::Checking => {
            gate::checking(frame, area);
            return;
        }
        Gate::Denied(reason) => {
            gate::denied(frame, area, reason);
            return;
        }
        Gate::Granted(_) => {}
    }

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    frame.render_widget(Paragraph::new(header_line(app)), rows[0]);

    if app.wizard.is_some() {
        wizard_view::render(frame, rows[1], app);
    } else {
        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Length(38), Constraint::Min(30)])
            .split(rows[1]);
        catalog_pane::render(frame, body[0], app);
        detail_pane::render(frame, body[1], app);
        if app.picker.is_some() {
            picker_view::render(frame, rows[1], app);
        }
    }

    frame.render_widget(
        Paragraph::new(hint_line(app)).style(Style::default().fg(Color::DarkGray)),
        rows[2],
    );
}

fn header_line(app: &App) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            format!(" opcon · {} ", app.client.channel()),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    if let Gate::Granted(status) = &app.gate {
        let tier = status
            .level
            .map(|l| l.label())
            .unwrap_or("unknown tier");
        spans.push(Span::styled(
            format!("{} ({})", status.username, tier),
            Style::default().fg(Color::Gray),
        ));
    }
    if app.session.busy() {
        spans.push(Span::styled(
            "  executing…",
            Style::default().fg(Color::Magenta),
        ));
    }
    if let Some(clock) = utc_clock() {
        spans.push(Span::styled(
            format!("  {} UTC", clock),
            Style::default().fg(Color::DarkGray),
        ));
    }
    Line::from(spans)
}

fn utc_clock() -> Option<String> {
    let fmt = time::format_description::parse("[hour]:[minute]:[second]").ok()?;
    time::OffsetDateTime::now_utc().format(&fmt).ok()
}

fn hint_line(app: &App) -> Line<'static> {
    let text = if app.picker.is_some() {
        "type: filter · ↑↓: move · Enter: choose · Tab/Shift-Tab: rarity/slot · Esc: cancel"
    } else if app.wizard.is_some() {
        "↑↓: move · Enter: continue · Esc: back/close"
    } else if app.editing.is_some() {
        "type value · Enter: set · Esc: cancel"
    } else {
        match app.focus {
            Focus::Commands => {
                "↑↓: move · Enter: select · Tab: category · x: execute · d: delete character · r: refresh · q: quit"
            }
            Focus::Params => "↑↓: param · Enter: edit/pick · x: execute · Esc: back · q: quit",
        }
    };
    Line::from(text.to_string())
}

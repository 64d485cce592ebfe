use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Wrap};

use crate::console::app::App;
use crate::console::view;
use crate::console::wizard::WizardStep;

pub(super) fn render(frame: &mut ratatui::Frame, area: Rect, app: &App) {
    let Some(wizard) = app.wizard.as_ref() else {
        return;
    };

    let step_no = match wizard.step {
        WizardStep::SelectChannel => 1,
        WizardStep::SelectCharacter => 2,
        WizardStep::Confirm => 3,
    };
    let title = format!("Delete Character · step {}/3", step_no);
    let inner = view::pane(frame, &title, area);

    let mut lines: Vec<Line> = Vec::new();
    match wizard.step {
        WizardStep::SelectChannel => {
            lines.push(Line::raw("Choose a channel:"));
            lines.push(Line::raw(""));
            match wizard.channels.as_deref() {
                None => lines.push(Line::styled(
                    "Loading channels…",
                    Style::default().fg(Color::Gray),
                )),
                Some([]) => lines.push(Line::styled(
                    "No channels found.",
                    Style::default().fg(Color::DarkGray),
                )),
                Some(channels) => {
                    for (ix, channel) in channels.iter().enumerate() {
                        let mut style = Style::default();
                        if ix == wizard.channel_ix {
                            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                        }
                        lines.push(Line::from(vec![
                            Span::styled(channel.name.clone(), style),
                            Span::styled(
                                format!("  {} characters", channel.character_count),
                                Style::default().fg(Color::DarkGray),
                            ),
                        ]));
                    }
                }
            }
        }
        WizardStep::SelectCharacter => {
            let channel = wizard.channel.as_deref().unwrap_or("?");
            lines.push(Line::raw(format!("Choose a character on {}:", channel)));
            lines.push(Line::raw(""));
            match wizard.characters.as_deref() {
                None => lines.push(Line::styled(
                    "Loading characters…",
                    Style::default().fg(Color::Gray),
                )),
                Some([]) => lines.push(Line::styled(
                    "No characters on this channel.",
                    Style::default().fg(Color::DarkGray),
                )),
                Some(characters) => {
                    for (ix, character) in characters.iter().enumerate() {
                        let mut style = Style::default();
                        if ix == wizard.character_ix {
                            style = style.bg(Color::DarkGray).add_modifier(Modifier::BOLD);
                        }
                        lines.push(Line::from(vec![
                            Span::styled(character.name.clone(), style),
                            Span::styled(
                                format!("  lv{}", character.level),
                                Style::default().fg(Color::DarkGray),
                            ),
                        ]));
                    }
                }
            }
        }
        WizardStep::Confirm => {
            let channel = wizard.channel.as_deref().unwrap_or("?");
            let name = wizard
                .character
                .as_ref()
                .map(|c| c.name.as_str())
                .unwrap_or("?");
            lines.push(Line::styled(
                format!("Permanently delete \"{}\" on {}?", name, channel),
                Style::default()
                    .fg(Color::Red)
                    .add_modifier(Modifier::BOLD),
            ));
            lines.push(Line::raw(""));
            lines.push(Line::styled(
                "This cannot be undone. All progress, inventory, and stats are lost.",
                Style::default().fg(Color::Red),
            ));
            lines.push(Line::raw(""));
            if wizard.busy {
                lines.push(Line::styled(
                    "Deleting…",
                    Style::default().fg(Color::Magenta),
                ));
            } else if wizard.notice.is_none() {
                lines.push(Line::raw("Enter: delete · Esc: back"));
            }
        }
    }

    if let Some(notice) = &wizard.notice {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("✓ {}", notice),
            Style::default().fg(Color::Green),
        ));
    }
    if let Some(error) = &wizard.error {
        lines.push(Line::raw(""));
        lines.push(Line::styled(
            format!("✗ {}", error),
            Style::default().fg(Color::Red),
        ));
    }

    frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), inner);
}

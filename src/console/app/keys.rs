use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::cache::CollectionKey;
use crate::resolver::InputSpec;

use super::*;

pub(super) fn handle_key(app: &mut App, key: KeyEvent) {
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit = true;
        return;
    }

    match app.gate {
        Gate::Checking => {}
        Gate::Denied(_) => {
            if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                app.quit = true;
            }
        }
        Gate::Granted(_) => handle_granted(app, key),
    }
}

fn handle_granted(app: &mut App, key: KeyEvent) {
    if app.picker.is_some() {
        handle_picker(app, key);
        return;
    }
    if app.wizard.is_some() {
        handle_wizard(app, key);
        return;
    }
    if app.editing.is_some() {
        handle_editing(app, key);
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.quit = true,
        KeyCode::Char('d') => app.open_wizard(),
        KeyCode::Char('r') => app.refresh(),
        KeyCode::Char('x') => app.start_execute(),
        KeyCode::Tab => {
            app.category = app.category.next();
            app.cursor = 0;
        }
        _ => match app.focus {
            Focus::Commands => handle_commands_focus(app, key),
            Focus::Params => handle_params_focus(app, key),
        },
    }
}

fn handle_commands_focus(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up => app.cursor = app.cursor.saturating_sub(1),
        KeyCode::Down => {
            let max = app.visible().len().saturating_sub(1);
            app.cursor = (app.cursor + 1).min(max);
        }
        KeyCode::Enter => app.select_command_under_cursor(),
        KeyCode::Right => {
            if app.selected_command().is_some() {
                app.focus = Focus::Params;
            }
        }
        _ => {}
    }
}

fn handle_params_focus(app: &mut App, key: KeyEvent) {
    let param_count = app
        .selected_command()
        .map(|cmd| cmd.params.len())
        .unwrap_or(0);
    match key.code {
        KeyCode::Esc | KeyCode::Left => app.focus = Focus::Commands,
        KeyCode::Up => app.param_cursor = app.param_cursor.saturating_sub(1),
        KeyCode::Down => {
            app.param_cursor = (app.param_cursor + 1).min(param_count.saturating_sub(1));
        }
        KeyCode::Enter => activate_param(app),
        _ => {}
    }
}

/// Enter on a parameter: pickers open the browser overlay, selects cycle
/// their options, primitives drop into inline editing. A player-scoped
/// browser with no player bound is a blocking placeholder; Enter does
/// nothing until a player is picked.
fn activate_param(app: &mut App) {
    let Some((command, spec)) = app.param_spec(app.param_cursor) else {
        return;
    };
    let name = match command.params.get(app.param_cursor) {
        Some(p) => p.name.clone(),
        None => return,
    };
    match spec {
        InputSpec::AwaitingPlayer => {}
        InputSpec::Select { .. } => app.cycle_select_option(),
        InputSpec::Text { .. } | InputSpec::Number { .. } => {
            let current = app.session.value(&name).unwrap_or("");
            app.editing = Some(Input::with(current));
        }
        _ => app.open_picker_at_cursor(),
    }
}

fn handle_editing(app: &mut App, key: KeyEvent) {
    let Some(input) = app.editing.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc => {
            app.editing = None;
        }
        KeyCode::Enter => {
            let value = input.buf.trim().to_string();
            app.editing = None;
            let name = match app
                .selected_command()
                .and_then(|cmd| cmd.params.get(app.param_cursor))
            {
                Some(p) => p.name.clone(),
                None => return,
            };
            app.set_param_value(&name, value, None);
        }
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Char(c) => input.insert_char(c),
        _ => {}
    }
}

fn handle_picker(app: &mut App, key: KeyEvent) {
    let Some(picker) = app.picker.as_mut() else {
        return;
    };
    let is_item_browser = picker.key == CollectionKey::Items;
    match key.code {
        KeyCode::Esc => {
            app.picker = None;
        }
        KeyCode::Up => picker.selected = picker.selected.saturating_sub(1),
        KeyCode::Down => {
            let rows = app
                .cache
                .loaded(&picker.key)
                .map(|c| picker.rows(c).len())
                .unwrap_or(0);
            picker.selected = (picker.selected + 1).min(rows.saturating_sub(1));
        }
        KeyCode::Tab if is_item_browser => picker.cycle_rarity(),
        KeyCode::BackTab if is_item_browser => picker.cycle_slot(),
        KeyCode::Backspace => {
            picker.query.backspace();
            picker.selected = 0;
        }
        KeyCode::Char(c) => {
            picker.query.insert_char(c);
            picker.selected = 0;
        }
        KeyCode::Enter => {
            let chosen = app.cache.loaded(&picker.key).and_then(|c| {
                picker
                    .rows(c)
                    .into_iter()
                    .nth(picker.selected)
                    .map(|row| (row.value, row.label))
            });
            if let Some((value, label)) = chosen {
                app.apply_pick(value, label);
            }
        }
        _ => {}
    }
}

fn handle_wizard(app: &mut App, key: KeyEvent) {
    use super::super::wizard::WizardStep;
    let Some(wizard) = app.wizard.as_mut() else {
        return;
    };
    match key.code {
        KeyCode::Esc | KeyCode::Backspace => {
            if !wizard.back() {
                app.wizard = None;
                app.wizard_reset_at = None;
            }
        }
        KeyCode::Up => wizard.move_up(),
        KeyCode::Down => wizard.move_down(),
        KeyCode::Enter => match wizard.step {
            WizardStep::SelectChannel => app.wizard_choose_channel(),
            WizardStep::SelectCharacter => wizard.choose_character(),
            WizardStep::Confirm => app.wizard_confirm_delete(),
        },
        _ => {}
    }
}

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::sensor::FormField;
use crate::ui::app::{App, Focus};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    // A pending confirmation captures every other key.
    if app.pending_confirmation().is_some() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => {
                app.answer_confirmation(true)
            }
            KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
                app.answer_confirmation(false)
            }
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Tab => return app.focus_next(),
        KeyCode::BackTab => return app.focus_prev(),
        KeyCode::F(2) => return app.cycle_filter(),
        KeyCode::F(5) => return app.reload(),
        _ => {}
    }

    match app.focus() {
        Focus::Field(field) => handle_form_key(app, field, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_form_key(app: &mut App, field: FormField, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit(),
        KeyCode::Backspace => app.backspace(),
        KeyCode::Left if field == FormField::Tipo => app.cycle_tipo(-1),
        KeyCode::Right if field == FormField::Tipo => app.cycle_tipo(1),
        KeyCode::Up => app.focus_prev(),
        KeyCode::Down => app.focus_next(),
        KeyCode::Char(ch) => app.type_char(ch),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Char('d') | KeyCode::Delete => app.request_delete_selected(),
        KeyCode::Char('f') => app.cycle_filter(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, target: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&target))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

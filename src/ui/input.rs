use crate::ui::app::{App, InputMode};
use crate::ui::router::NavLink;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    let mode = app.input_mode().clone();
    match mode {
        InputMode::GoTo(_) => handle_goto_key(app, key),
        InputMode::Search => handle_search_key(app, key),
        InputMode::Normal => handle_normal_key(app, key),
    }
}

fn handle_goto_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Enter => app.submit_goto(),
        KeyCode::Backspace => app.pop_goto_char(),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.push_goto_char(ch),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.cancel_input(),
        KeyCode::Enter => app.submit_search(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Tab => app.cycle_search_type(),
        KeyCode::Char(ch) if !has_command_modifier(key) => app.push_query_char(ch),
        _ => {}
    }
}

fn handle_normal_key(app: &mut App, key: KeyEvent) {
    if has_command_modifier(key) {
        return;
    }
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char(digit @ '1'..='3') => {
            let index = digit as usize - '1' as usize;
            if let Some(link) = NavLink::ALL.get(index) {
                app.navigate(link.route());
            }
        }
        KeyCode::Char('g') => app.open_goto(),
        KeyCode::Char('/') => app.start_search_edit(),
        KeyCode::Char('c') => app.clear_search(),
        KeyCode::Char('r') => app.reload(),
        KeyCode::Char('b') | KeyCode::Backspace | KeyCode::Esc => app.back(),
        KeyCode::Char('n') | KeyCode::Right => app.next_page(),
        KeyCode::Char('p') | KeyCode::Left => app.prev_page(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.select_prev(),
        KeyCode::Tab => app.cycle_search_type(),
        KeyCode::Enter => app.open_selected(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}

fn has_command_modifier(key: KeyEvent) -> bool {
    key.modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
}

use crate::ui::app::{App, Focus};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Rows moved by PageUp/PageDown.
const PAGE_STEP: isize = 10;

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.focus() {
        Focus::Search => handle_search_key(app, key),
        Focus::Basket => handle_basket_key(app, key),
        Focus::List => handle_list_key(app, key),
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    if is_ctrl_char(key, 'u') {
        app.clear_query();
        return;
    }

    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.focus_list(),
        KeyCode::Backspace => app.pop_query_char(),
        KeyCode::Up => app.move_selection(-1),
        KeyCode::Down => app.move_selection(1),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_query_char(ch)
        }
        _ => {}
    }
}

fn handle_basket_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Char('b') => {
            app.toggle_basket();
        }
        KeyCode::Char('q') => app.request_quit(),
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Char('/') => app.focus_search(),
        KeyCode::Char('b') => {
            app.toggle_basket();
        }
        KeyCode::Char('a') | KeyCode::Enter => {
            app.add_selected_to_basket();
        }
        KeyCode::Tab => app.cycle_category(1),
        KeyCode::BackTab => app.cycle_category(-1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::PageUp => app.move_selection(-PAGE_STEP),
        KeyCode::PageDown => app.move_selection(PAGE_STEP),
        KeyCode::Home => app.move_selection(isize::MIN),
        KeyCode::End => app.move_selection(isize::MAX),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}

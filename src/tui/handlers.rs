// File: src/tui/handlers.rs
// Maps keyboard input onto TUI actions.
use crate::model::ListKind;
use crate::tui::action::Action;
use crate::tui::state::{
    AppState, Focus, QuickAction, delete_char_at, delete_char_before, insert_char,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handles one key press. Navigation is applied to `state` directly; anything
/// that touches the lists or produces a notice is returned as an [`Action`].
pub fn handle_key_event(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    if state.show_full_help {
        return match key.code {
            KeyCode::Char('?') | KeyCode::Esc | KeyCode::Enter => Some(Action::ToggleHelp),
            KeyCode::Char('q') => Some(Action::Quit),
            _ => None,
        };
    }

    match key.code {
        KeyCode::Tab => {
            state.focus = state.focus.next();
            return None;
        }
        KeyCode::BackTab => {
            state.focus = state.focus.previous();
            return None;
        }
        _ => {}
    }

    match state.focus {
        Focus::TaskInput => handle_input(key, state, ListKind::Tasks),
        Focus::AppointmentInput => handle_input(key, state, ListKind::Appointments),
        Focus::TaskList => handle_list(key, state, ListKind::Tasks),
        Focus::AppointmentList => handle_list(key, state, ListKind::Appointments),
        Focus::Actions => handle_actions(key, state),
    }
}

fn handle_input(key: KeyEvent, state: &mut AppState, kind: ListKind) -> Option<Action> {
    // Prevent out-of-bounds edits if cursor drift happened
    let char_count = state.screen.section(kind).buffer().chars().count();
    if state.cursor(kind) > char_count {
        state.set_cursor(kind, char_count);
    }
    let buffer = state.screen.section(kind).buffer().to_string();
    let cursor = state.cursor(kind);

    match key.code {
        KeyCode::Enter => Some(Action::Submit(kind)),
        KeyCode::Esc | KeyCode::Down => {
            state.focus = Focus::list_of(kind);
            None
        }
        KeyCode::Char(c) => {
            let (text, cursor) = insert_char(&buffer, cursor, c);
            Some(Action::EditBuffer { kind, text, cursor })
        }
        KeyCode::Backspace => {
            delete_char_before(&buffer, cursor).map(|(text, cursor)| Action::EditBuffer {
                kind,
                text,
                cursor,
            })
        }
        KeyCode::Delete => delete_char_at(&buffer, cursor).map(|text| Action::EditBuffer {
            kind,
            text,
            cursor,
        }),
        KeyCode::Left => {
            state.move_cursor_left(kind);
            None
        }
        KeyCode::Right => {
            state.move_cursor_right(kind);
            None
        }
        KeyCode::Home => {
            state.move_cursor_home(kind);
            None
        }
        KeyCode::End => {
            state.move_cursor_end(kind);
            None
        }
        _ => None,
    }
}

fn handle_list(key: KeyEvent, state: &mut AppState, kind: ListKind) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Down | KeyCode::Char('j') => {
            state.next(kind);
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous(kind);
            None
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            // Resolve against the list as it is at this key press.
            let id = state.selected_entry_id(kind)?;
            Some(Action::Remove(kind, id))
        }
        KeyCode::Char('i') | KeyCode::Enter => {
            state.focus = Focus::input_of(kind);
            None
        }
        _ => None,
    }
}

fn handle_actions(key: KeyEvent, state: &mut AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Char('a') => Some(Action::AutomateWorkflows),
        KeyCode::Char('r') => Some(Action::SuggestReminders),
        KeyCode::Down | KeyCode::Char('j') => {
            state.next_action();
            None
        }
        KeyCode::Up | KeyCode::Char('k') => {
            state.previous_action();
            None
        }
        KeyCode::Enter | KeyCode::Char(' ') => state.selected_action().map(QuickAction::action),
        _ => None,
    }
}

//! Keyboard Input Handler
//!
//! Modal sub-flows take the keys first: an open dialog or an inline rename
//! owns every keystroke, then a live translation edit, and only then do
//! panel navigation and catalog shortcuts see the key.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use loctui::messages::Intent;
use loctui::session::EditMode;

use crate::{App, Panel};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    // dialogs and renames route identically: text in, commit or cancel out
    match app.editor.session.mode() {
        EditMode::AddingWord | EditMode::AddingLanguage | EditMode::Renaming(_) => {
            match key.code {
                KeyCode::Enter => app.dispatch(Intent::Commit),
                KeyCode::Esc => app.dispatch(Intent::Cancel),
                KeyCode::Backspace => app.dispatch(Intent::InputBackspace),
                KeyCode::Char(c) => app.dispatch(Intent::InputChar(c)),
                _ => {}
            }
            return;
        }
        // PickingIcon does not block the session; keys fall through
        EditMode::PickingIcon(_) | EditMode::Idle => {}
    }

    // live translation edit in the words panel
    if app.cell_edit {
        match key.code {
            KeyCode::Enter | KeyCode::Esc => app.cell_edit = false,
            KeyCode::Backspace => app.edit_selected_cell(|text| {
                text.pop();
            }),
            KeyCode::Char(c) => app.edit_selected_cell(move |text| text.push(c)),
            _ => {}
        }
        return;
    }

    // global keys
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => {
            app.quit();
            return;
        }
        (KeyCode::Char('s'), KeyModifiers::CONTROL) => {
            app.save_catalog();
            return;
        }
        (KeyCode::Tab, _) => {
            app.toggle_focus();
            return;
        }
        (KeyCode::Char('w'), KeyModifiers::NONE) => {
            app.dispatch(Intent::BeginAddWord);
            return;
        }
        (KeyCode::Char('n'), KeyModifiers::NONE) => {
            app.dispatch(Intent::BeginAddLanguage);
            return;
        }
        _ => {}
    }

    match app.focus {
        Panel::Languages => handle_language_panel_key(app, key),
        Panel::Words => handle_word_panel_key(app, key),
    }
}

fn handle_language_panel_key(app: &mut App, key: KeyEvent) {
    match (key.code, key.modifiers) {
        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::Char('k'), _) => {
            app.select_prev_language();
        }
        (KeyCode::Down, KeyModifiers::NONE) | (KeyCode::Char('j'), _) => {
            app.select_next_language();
        }
        // move the selected row; a true from/to reorder, not a delta
        (KeyCode::Up, KeyModifiers::SHIFT) | (KeyCode::Char('['), _) => {
            move_selected_language(app, Direction::Up);
        }
        (KeyCode::Down, KeyModifiers::SHIFT) | (KeyCode::Char(']'), _) => {
            move_selected_language(app, Direction::Down);
        }
        (KeyCode::Enter, _) | (KeyCode::Char('e'), _) => {
            if app.selected_language < app.editor.model.registry.len() {
                app.dispatch(Intent::ToggleRename(app.selected_language));
            }
        }
        (KeyCode::Char('i'), _) => {
            if app.selected_language < app.editor.model.registry.len() {
                app.dispatch(Intent::BeginIconPick(app.selected_language));
            }
        }
        (KeyCode::Char('x'), _) => {
            if let Some(id) = app.selected_language_id() {
                app.dispatch(Intent::ClearIcon(id));
            }
        }
        (KeyCode::Char('d'), _) | (KeyCode::Delete, _) => {
            if let Some(id) = app.selected_language_id() {
                app.dispatch(Intent::RemoveLanguage(id));
            }
        }
        _ => {}
    }
}

fn handle_word_panel_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => app.select_prev_word(),
        KeyCode::Down | KeyCode::Char('j') => app.select_next_word(),
        KeyCode::Left | KeyCode::Char('h') => app.select_prev_column(),
        KeyCode::Right | KeyCode::Char('l') => app.select_next_column(),
        KeyCode::Enter | KeyCode::Char('e') => {
            if app.selected_word_key().is_some() && app.column_language_id().is_some() {
                app.cell_edit = true;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(word_key) = app.selected_word_key() {
                app.dispatch(Intent::RemoveWord(word_key));
            }
        }
        _ => {}
    }
}

enum Direction {
    Up,
    Down,
}

fn move_selected_language(app: &mut App, direction: Direction) {
    let len = app.editor.model.registry.len();
    let from = app.selected_language;
    let to = match direction {
        Direction::Up if from > 0 => from - 1,
        Direction::Down if from + 1 < len => from + 1,
        _ => return,
    };
    app.dispatch(Intent::ReorderLanguage { from, to });
    // keep the cursor on the row that moved
    app.selected_language = to;
}

//! Tests for the edit session flows
//!
//! Dialog commit/cancel, live rename routing, and the interplay between
//! renaming and icon picking, driven through intents the way the UI
//! dispatches them.

use loctui::editor::Editor;
use loctui::messages::Intent;
use loctui::model::ModelError;
use loctui::session::EditMode;

fn type_text(editor: &mut Editor, text: &str) {
    for c in text.chars() {
        editor.apply(Intent::InputChar(c)).unwrap();
    }
}

#[test]
fn test_add_word_commit_creates_entry_and_idles() {
    let mut editor = Editor::default();
    editor.apply(Intent::BeginAddWord).unwrap();
    type_text(&mut editor, "greeting");
    editor.apply(Intent::Commit).unwrap();

    assert!(editor.session.is_idle());
    let keys: Vec<&str> = editor.model.words.keys().collect();
    assert_eq!(keys, ["greeting"]);
    assert_eq!(editor.model.words.get("greeting").unwrap().record_count(), 0);
}

#[test]
fn test_add_word_cancel_leaves_no_trace() {
    let mut editor = Editor::default();
    editor.apply(Intent::BeginAddWord).unwrap();
    type_text(&mut editor, "greeting");
    editor.apply(Intent::Cancel).unwrap();

    assert!(editor.session.is_idle());
    assert!(editor.model.words.is_empty());
    assert!(editor.session.input.is_empty());
}

#[test]
fn test_add_language_commit_appends_to_registry() {
    let mut editor = Editor::default();
    editor.model.registry.add("existing");

    editor.apply(Intent::BeginAddLanguage).unwrap();
    type_text(&mut editor, "fresh");
    editor.apply(Intent::Commit).unwrap();

    assert!(editor.session.is_idle());
    assert_eq!(editor.model.registry.len(), 2);
    assert_eq!(editor.model.registry.languages()[1].name, "fresh");
}

#[test]
fn test_duplicate_commit_keeps_dialog_and_buffer() {
    let mut editor = Editor::default();
    editor.model.words.add_word("taken").unwrap();

    editor.apply(Intent::BeginAddWord).unwrap();
    type_text(&mut editor, "taken");
    let err = editor.apply(Intent::Commit).unwrap_err();

    assert_eq!(err, ModelError::DuplicateKey("taken".to_string()));
    assert_eq!(editor.session.mode(), EditMode::AddingWord);
    assert_eq!(editor.session.input, "taken");
    assert_eq!(editor.model.words.len(), 1);

    // fix the key and commit again
    editor.apply(Intent::InputChar('2')).unwrap();
    editor.apply(Intent::Commit).unwrap();
    assert!(editor.session.is_idle());
    assert_eq!(editor.model.words.len(), 2);
}

#[test]
fn test_rename_routes_keystrokes_without_commit_step() {
    let mut editor = Editor::default();
    let id = editor.model.registry.add("en");

    editor.apply(Intent::ToggleRename(0)).unwrap();
    type_text(&mut editor, "glish");
    // every keystroke already landed
    assert_eq!(editor.model.registry.get(id).unwrap().name, "english");

    // toggling the same row again ends the flow, nothing else changes
    editor.apply(Intent::ToggleRename(0)).unwrap();
    assert!(editor.session.is_idle());
    assert_eq!(editor.model.registry.get(id).unwrap().name, "english");
}

#[test]
fn test_rename_switches_rows_without_idling() {
    let mut editor = Editor::default();
    let a = editor.model.registry.add("a");
    let b = editor.model.registry.add("b");

    editor.apply(Intent::ToggleRename(0)).unwrap();
    type_text(&mut editor, "x");
    editor.apply(Intent::ToggleRename(1)).unwrap();
    type_text(&mut editor, "y");

    assert_eq!(editor.session.mode(), EditMode::Renaming(1));
    assert_eq!(editor.model.registry.get(a).unwrap().name, "ax");
    assert_eq!(editor.model.registry.get(b).unwrap().name, "by");
}

#[test]
fn test_pick_clears_rename_but_keeps_applied_text() {
    let mut editor = Editor::default();
    let id = editor.model.registry.add("en");

    editor.apply(Intent::ToggleRename(0)).unwrap();
    type_text(&mut editor, "g");
    editor.apply(Intent::BeginIconPick(0)).unwrap();

    assert_eq!(editor.session.mode(), EditMode::PickingIcon(0));
    assert_eq!(editor.session.renaming_index(), None);
    // the rename was live; nothing is rolled back or discarded
    assert_eq!(editor.model.registry.get(id).unwrap().name, "eng");
}

#[test]
fn test_rename_target_out_of_range_is_rejected() {
    let mut editor = Editor::default();
    editor.model.registry.add("only");

    let err = editor.apply(Intent::ToggleRename(3)).unwrap_err();
    assert_eq!(err, ModelError::IndexOutOfRange { index: 3, len: 1 });
    assert!(editor.session.is_idle());
}

#[test]
fn test_empty_rename_is_allowed() {
    let mut editor = Editor::default();
    let id = editor.model.registry.add("x");

    editor.apply(Intent::ToggleRename(0)).unwrap();
    editor.apply(Intent::InputBackspace).unwrap();

    assert_eq!(editor.model.registry.get(id).unwrap().name, "");
}

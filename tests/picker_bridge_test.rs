//! Tests for the deferred icon selection protocol
//!
//! One pending slot, two signals. Updates write through to the pending
//! language and keep the slot occupied; close is the only clear; stray
//! signals are no-ops. The editing session keeps running while a pick is
//! out.

use std::path::PathBuf;

use loctui::editor::{Editor, Effect};
use loctui::messages::Intent;
use loctui::model::IconRef;
use loctui::services::picker::PickerEvent;

fn icon(name: &str) -> IconRef {
    IconRef(PathBuf::from(name))
}

#[test]
fn test_full_pick_sequence_with_retarget() {
    let mut editor = Editor::default();
    let first = editor.model.registry.add("first");
    let second = editor.model.registry.add("second");

    // pick for the first row
    let effect = editor.apply(Intent::BeginIconPick(0)).unwrap();
    assert_eq!(effect, Some(Effect::StartPicker(first)));

    editor.on_picker_event(PickerEvent::Updated(icon("a.png")));
    assert_eq!(
        editor.model.registry.get(first).unwrap().icon,
        Some(icon("a.png"))
    );

    // retarget before the first pick closes; last request wins
    editor.apply(Intent::BeginIconPick(1)).unwrap();
    editor.on_picker_event(PickerEvent::Updated(icon("b.png")));

    assert_eq!(
        editor.model.registry.get(second).unwrap().icon,
        Some(icon("b.png"))
    );
    // the first language keeps what it had when the target moved on
    assert_eq!(
        editor.model.registry.get(first).unwrap().icon,
        Some(icon("a.png"))
    );

    // close clears the slot; a stray late update changes nothing
    editor.on_picker_event(PickerEvent::Closed);
    assert_eq!(editor.bridge.pending(), None);
    editor.on_picker_event(PickerEvent::Updated(icon("c.png")));
    assert_eq!(
        editor.model.registry.get(second).unwrap().icon,
        Some(icon("b.png"))
    );
}

#[test]
fn test_interim_updates_all_apply() {
    let mut editor = Editor::default();
    let lang = editor.model.registry.add("lang");
    editor.apply(Intent::BeginIconPick(0)).unwrap();

    // the user browses; every interim selection lands
    for name in ["one.png", "two.png", "three.png"] {
        editor.on_picker_event(PickerEvent::Updated(icon(name)));
        assert_eq!(
            editor.model.registry.get(lang).unwrap().icon,
            Some(icon(name))
        );
        assert_eq!(editor.bridge.pending(), Some(lang));
    }
}

#[test]
fn test_duplicate_close_signals_are_harmless() {
    let mut editor = Editor::default();
    editor.model.registry.add("lang");
    editor.apply(Intent::BeginIconPick(0)).unwrap();

    editor.on_picker_event(PickerEvent::Closed);
    editor.on_picker_event(PickerEvent::Closed);
    assert_eq!(editor.bridge.pending(), None);
    assert!(editor.session.is_idle());
}

#[test]
fn test_editing_continues_while_pick_is_out() {
    let mut editor = Editor::default();
    let lang = editor.model.registry.add("lang");
    editor.apply(Intent::BeginIconPick(0)).unwrap();

    // the pick does not block the session: words can still be edited
    editor.model.words.add_word("hi").unwrap();
    editor
        .apply(Intent::SetTranslation {
            key: "hi".to_string(),
            language: lang,
            text: "Hello".to_string(),
        })
        .unwrap();

    editor.on_picker_event(PickerEvent::Updated(icon("late.png")));
    assert_eq!(
        editor.model.registry.get(lang).unwrap().icon,
        Some(icon("late.png"))
    );
    assert_eq!(editor.model.translation("hi", lang).unwrap(), "Hello");
}

#[test]
fn test_pick_survives_target_removal_without_error() {
    let mut editor = Editor::default();
    let doomed = editor.model.registry.add("doomed");
    let survivor = editor.model.registry.add("survivor");
    editor.apply(Intent::BeginIconPick(0)).unwrap();

    editor.apply(Intent::RemoveLanguage(doomed)).unwrap();

    // updates for the removed target are dropped silently
    editor.on_picker_event(PickerEvent::Updated(icon("late.png")));
    assert_eq!(editor.model.registry.get(survivor).unwrap().icon, None);

    editor.on_picker_event(PickerEvent::Closed);
    assert_eq!(editor.bridge.pending(), None);
}

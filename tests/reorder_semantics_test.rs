//! Tests for list reordering semantics
//!
//! Reorder is a true move: the element leaves its slot and the elements in
//! between shift by one, exactly what a user expects from dragging a row.
//! It is NOT an endpoint swap, and two single moves are not inverses in
//! general.

use loctui::model::{LanguageRegistry, ModelError};

fn registry_of(names: &[&str]) -> LanguageRegistry {
    let mut registry = LanguageRegistry::new();
    for name in names {
        registry.add(*name);
    }
    registry
}

fn names(registry: &LanguageRegistry) -> Vec<String> {
    registry
        .languages()
        .iter()
        .map(|l| l.name.clone())
        .collect()
}

#[test]
fn test_move_shifts_intervening_rows() {
    let mut registry = registry_of(&["A", "B", "C", "D"]);
    registry.reorder(0, 2).unwrap();
    assert_eq!(names(&registry), ["B", "C", "A", "D"]);
}

#[test]
fn test_move_down_then_back_restores_order() {
    // the moved element returns to index 0, so this pair does restore
    let mut registry = registry_of(&["A", "B", "C", "D"]);
    registry.reorder(0, 2).unwrap();
    registry.reorder(2, 0).unwrap();
    assert_eq!(names(&registry), ["A", "B", "C", "D"]);
}

#[test]
fn test_inverse_only_undoes_the_latest_move() {
    // an inverse pair restores order only when nothing happened in
    // between; with an intervening move it rewinds one step, not two
    let mut registry = registry_of(&["A", "B", "C", "D"]);
    registry.reorder(0, 2).unwrap(); // [B, C, A, D]
    registry.reorder(1, 3).unwrap(); // [B, A, D, C]
    assert_eq!(names(&registry), ["B", "A", "D", "C"]);
    registry.reorder(3, 1).unwrap(); // undoes only the second move
    assert_eq!(names(&registry), ["B", "C", "A", "D"]);
}

#[test]
fn test_adjacent_moves_behave_like_swaps() {
    let mut registry = registry_of(&["A", "B", "C"]);
    registry.reorder(1, 2).unwrap();
    assert_eq!(names(&registry), ["A", "C", "B"]);
    registry.reorder(2, 1).unwrap();
    assert_eq!(names(&registry), ["A", "B", "C"]);
}

#[test]
fn test_out_of_range_indices_leave_order_unchanged() {
    let mut registry = registry_of(&["A", "B"]);

    let err = registry.reorder(0, 5).unwrap_err();
    assert_eq!(err, ModelError::IndexOutOfRange { index: 5, len: 2 });

    let err = registry.reorder(7, 0).unwrap_err();
    assert_eq!(err, ModelError::IndexOutOfRange { index: 7, len: 2 });

    assert_eq!(names(&registry), ["A", "B"]);
}

// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - render: main orchestration function that coordinates all rendering
// - language_list: the language panel (rename cursor, icon markers, pick state)
// - word_table: word keys with one translation column per language
// - dialogs: centered input boxes for add-word / add-language
// - status_bar: bottom bar with mode hints and toast messages

pub mod dialogs;
pub mod language_list;
pub mod render;
pub mod status_bar;
pub mod word_table;

// Re-export main render function for convenience
pub use render::render;

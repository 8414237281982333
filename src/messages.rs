//! User intents.
//!
//! The rendering collaborator (the TUI, or anything else that can draw the
//! catalog) translates raw input into these intents and dispatches them to
//! the editor core. Intents carry language ids where the operation targets
//! an identity and row indices where it targets a position; positions are
//! resolved to ids at application time and never stored.

use crate::model::LanguageId;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Open the add-word input dialog.
    BeginAddWord,
    /// Open the add-language input dialog.
    BeginAddLanguage,
    /// Append a character to the open dialog's buffer, or to the name of
    /// the row being renamed (applied immediately).
    InputChar(char),
    /// Delete the last character from the dialog buffer or rename target.
    InputBackspace,
    /// Commit the open dialog (creating the word or language), or end an
    /// inline rename.
    Commit,
    /// Close the open dialog without mutating the catalog, end an inline
    /// rename, or drop the pick highlight.
    Cancel,
    /// Toggle inline rename for the language row at `index`.
    ToggleRename(usize),
    /// Start the external icon pick for the row at `index`, replacing any
    /// pick already pending.
    BeginIconPick(usize),
    /// Drop the icon of this language.
    ClearIcon(LanguageId),
    /// Remove this language, cascading its translation records.
    RemoveLanguage(LanguageId),
    /// Move a language row. True from/to positions, not deltas; the rows in
    /// between shift by one.
    ReorderLanguage { from: usize, to: usize },
    /// Remove the word entry with this key.
    RemoveWord(String),
    /// Create-or-overwrite one translation record.
    SetTranslation {
        key: String,
        language: LanguageId,
        text: String,
    },
}

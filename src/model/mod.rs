//! Pure localization data model.
//!
//! This module defines the catalog data structures, separated from I/O
//! services and UI state:
//! - LanguageRegistry: ordered languages, identity and reordering semantics
//! - WordStore: keyed word entries with per-language translation records
//! - LocalizationModel: the one shared store, coordinating cross-component
//!   invariants (cascade on removal, language membership checks)
//!
//! Everything here is Clone + Debug and serializable, so the whole catalog
//! can be snapshotted for persistence and rebuilt in tests.

mod language;
mod registry;
mod words;

pub use language::{IconRef, Language, LanguageId};
pub use registry::LanguageRegistry;
pub use words::{WordEntry, WordStore};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Recoverable failures of catalog operations.
///
/// Every operation is all-or-nothing: on error the model is unchanged and
/// the UI surfaces the message in the status line. Nothing here is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("language {0} does not exist")]
    LanguageNotFound(LanguageId),

    #[error("no word entry for key {0:?}")]
    WordNotFound(String),

    #[error("a word entry for key {0:?} already exists")]
    DuplicateKey(String),

    #[error("index {index} is out of range for {len} languages")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("language {0} is not in the registry")]
    UnknownLanguage(LanguageId),
}

/// The shared catalog: languages plus word entries.
///
/// Constructed once at startup (loaded from the snapshot or empty) and
/// passed by reference to every component; there is no ambient global.
/// Operations that span both collections live here so the invariants
/// between them hold after every call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LocalizationModel {
    pub registry: LanguageRegistry,
    pub words: WordStore,
}

impl LocalizationModel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Remove a language and cascade: every translation record keyed to
    /// `id`, across all word entries, goes with it.
    pub fn remove_language(&mut self, id: LanguageId) -> Result<(), ModelError> {
        self.registry.remove(id)?;
        self.words.on_language_removed(id);
        Ok(())
    }

    /// Create-or-overwrite one translation record. Fails `UnknownLanguage`
    /// when `id` is not currently registered, `WordNotFound` when the key
    /// does not exist.
    pub fn set_translation(
        &mut self,
        key: &str,
        id: LanguageId,
        text: impl Into<String>,
    ) -> Result<(), ModelError> {
        if !self.registry.contains(id) {
            return Err(ModelError::UnknownLanguage(id));
        }
        self.words.set_translation(key, id, text)
    }

    /// Read one translation. A live `(key, id)` pair with no record reads
    /// as `""`; an unregistered language fails `UnknownLanguage`.
    pub fn translation(&self, key: &str, id: LanguageId) -> Result<&str, ModelError> {
        if !self.registry.contains(id) {
            return Err(ModelError::UnknownLanguage(id));
        }
        self.words.translation(key, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_remove_language_cascades_into_word_store() {
        let mut model = LocalizationModel::new();
        let en = model.registry.add("English");
        model.words.add_word("hi").unwrap();
        model.set_translation("hi", en, "Hello").unwrap();

        model.remove_language(en).unwrap();

        assert!(!model.words.get("hi").unwrap().has_record(en));
        assert_eq!(
            model.translation("hi", en).unwrap_err(),
            ModelError::UnknownLanguage(en)
        );
    }

    #[test]
    fn test_set_translation_rejects_unregistered_language() {
        let mut model = LocalizationModel::new();
        let en = model.registry.add("English");
        model.remove_language(en).unwrap();
        model.words.add_word("hi").unwrap();

        let err = model.set_translation("hi", en, "Hello").unwrap_err();
        assert_eq!(err, ModelError::UnknownLanguage(en));
    }

    #[test]
    fn test_translation_defaults_to_empty_for_live_pair() {
        let mut model = LocalizationModel::new();
        let en = model.registry.add("English");
        model.words.add_word("hi").unwrap();
        assert_eq!(model.translation("hi", en).unwrap(), "");
    }
}

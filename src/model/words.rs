//! Word entries and their per-language translation records.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{LanguageId, ModelError};

/// One translatable piece of text: a unique key plus the translations
/// written so far. Records are created implicitly on first write; a missing
/// record reads as the empty string (default-untranslated).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    key: String,
    translations: HashMap<LanguageId, String>,
}

impl WordEntry {
    fn new(key: String) -> Self {
        Self {
            key,
            translations: HashMap::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Translation text for `id`, or `""` when no record exists.
    pub fn translation(&self, id: LanguageId) -> &str {
        self.translations.get(&id).map(String::as_str).unwrap_or("")
    }

    /// Whether an actual record exists for `id` (as opposed to the implicit
    /// empty default).
    pub fn has_record(&self, id: LanguageId) -> bool {
        self.translations.contains_key(&id)
    }

    /// Number of languages this entry has records for.
    pub fn record_count(&self) -> usize {
        self.translations.len()
    }
}

/// All word entries, in insertion order so listings are reproducible.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WordStore {
    entries: Vec<WordEntry>,
}

impl WordStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry with no translation records yet.
    pub fn add_word(&mut self, key: impl Into<String>) -> Result<(), ModelError> {
        let key = key.into();
        if self.get(&key).is_some() {
            return Err(ModelError::DuplicateKey(key));
        }
        self.entries.push(WordEntry::new(key));
        Ok(())
    }

    pub fn remove_word(&mut self, key: &str) -> Result<(), ModelError> {
        let pos = self
            .entries
            .iter()
            .position(|e| e.key == key)
            .ok_or_else(|| ModelError::WordNotFound(key.to_string()))?;
        self.entries.remove(pos);
        Ok(())
    }

    /// Create-or-overwrite the record for `(key, id)`.
    ///
    /// Language membership is checked one level up, in
    /// `LocalizationModel::set_translation`, where the registry is in scope.
    pub fn set_translation(
        &mut self,
        key: &str,
        id: LanguageId,
        text: impl Into<String>,
    ) -> Result<(), ModelError> {
        let entry = self
            .get_mut(key)
            .ok_or_else(|| ModelError::WordNotFound(key.to_string()))?;
        entry.translations.insert(id, text.into());
        Ok(())
    }

    /// Translation text for `(key, id)`; `""` when no record exists.
    pub fn translation(&self, key: &str, id: LanguageId) -> Result<&str, ModelError> {
        let entry = self
            .get(key)
            .ok_or_else(|| ModelError::WordNotFound(key.to_string()))?;
        Ok(entry.translation(id))
    }

    pub fn get(&self, key: &str) -> Option<&WordEntry> {
        self.entries.iter().find(|e| e.key == key)
    }

    fn get_mut(&mut self, key: &str) -> Option<&mut WordEntry> {
        self.entries.iter_mut().find(|e| e.key == key)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    pub fn entries(&self) -> &[WordEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cascade hook: drop every record keyed to `id` across all entries.
    /// Invoked when a language leaves the registry, never leaves a dangling
    /// record behind.
    pub fn on_language_removed(&mut self, id: LanguageId) {
        for entry in &mut self.entries {
            entry.translations.remove(&id);
        }
    }
}

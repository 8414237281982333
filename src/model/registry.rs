//! Ordered language registry.
//!
//! Owns language identity (a monotonic id counter) and ordering. Order is
//! meaningful (it is the display and export order) but fully independent of
//! identity: nothing else in the model keys on positions.

use serde::{Deserialize, Serialize};

use super::{IconRef, Language, LanguageId, ModelError};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LanguageRegistry {
    languages: Vec<Language>,
    /// Next id to mint. Only ever increments, so removed ids never come back.
    next_id: u64,
}

impl LanguageRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a new language with a freshly minted id and no icon.
    pub fn add(&mut self, name: impl Into<String>) -> LanguageId {
        let id = LanguageId(self.next_id);
        self.next_id += 1;
        self.languages.push(Language {
            id,
            name: name.into(),
            icon: None,
        });
        id
    }

    /// Remove the language with `id` and return it.
    ///
    /// The caller owns the cascade: translation records keyed to `id` must
    /// be dropped from the word store as well (`LocalizationModel` does
    /// both in one step).
    pub fn remove(&mut self, id: LanguageId) -> Result<Language, ModelError> {
        let pos = self
            .position_of(id)
            .ok_or(ModelError::LanguageNotFound(id))?;
        Ok(self.languages.remove(pos))
    }

    /// Move the language at `from` to position `to`, shifting everything in
    /// between. A true move, not an endpoint swap: with [A,B,C,D],
    /// reorder(0, 2) yields [B,C,A,D].
    pub fn reorder(&mut self, from: usize, to: usize) -> Result<(), ModelError> {
        let len = self.languages.len();
        if from >= len {
            return Err(ModelError::IndexOutOfRange { index: from, len });
        }
        if to >= len {
            return Err(ModelError::IndexOutOfRange { index: to, len });
        }
        let language = self.languages.remove(from);
        self.languages.insert(to, language);
        Ok(())
    }

    /// Replace the display name. Empty names are allowed; this layer imposes
    /// no validation.
    pub fn rename(&mut self, id: LanguageId, name: impl Into<String>) -> Result<(), ModelError> {
        let language = self
            .get_mut(id)
            .ok_or(ModelError::LanguageNotFound(id))?;
        language.name = name.into();
        Ok(())
    }

    /// Replace the icon reference (or clear it with `None`).
    pub fn set_icon(
        &mut self,
        id: LanguageId,
        icon: Option<IconRef>,
    ) -> Result<(), ModelError> {
        let language = self
            .get_mut(id)
            .ok_or(ModelError::LanguageNotFound(id))?;
        language.icon = icon;
        Ok(())
    }

    pub fn get(&self, id: LanguageId) -> Option<&Language> {
        self.languages.iter().find(|l| l.id == id)
    }

    fn get_mut(&mut self, id: LanguageId) -> Option<&mut Language> {
        self.languages.iter_mut().find(|l| l.id == id)
    }

    pub fn contains(&self, id: LanguageId) -> bool {
        self.get(id).is_some()
    }

    /// Id of the language currently at `index`, if any.
    pub fn id_at(&self, index: usize) -> Option<LanguageId> {
        self.languages.get(index).map(|l| l.id)
    }

    pub fn position_of(&self, id: LanguageId) -> Option<usize> {
        self.languages.iter().position(|l| l.id == id)
    }

    /// Ordered read-only snapshot for rendering.
    pub fn languages(&self) -> &[Language] {
        &self.languages
    }

    pub fn len(&self) -> usize {
        self.languages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.languages.is_empty()
    }
}

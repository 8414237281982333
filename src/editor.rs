//! Editor core.
//!
//! Owns the catalog, the edit session state machine, and the picker bridge,
//! and is the single place mutations happen: the rendering collaborator
//! dispatches intents here, the host event loop feeds picker events here.
//! Everything is synchronous and runs to completion within one event-loop
//! turn; the only state that spans turns is the bridge's pending slot.

use crate::messages::Intent;
use crate::model::{LanguageId, LocalizationModel, ModelError};
use crate::services::picker::{PickerBridge, PickerEvent};
use crate::session::{EditMode, EditSession};

/// Side effect the host must carry out after an intent was applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Present the external picker surface targeting this language.
    StartPicker(LanguageId),
}

#[derive(Debug, Default)]
pub struct Editor {
    pub model: LocalizationModel,
    pub session: EditSession,
    pub bridge: PickerBridge,
}

impl Editor {
    pub fn new(model: LocalizationModel) -> Self {
        Self {
            model,
            session: EditSession::new(),
            bridge: PickerBridge::new(),
        }
    }

    /// Apply one intent. On error the catalog is unchanged and the caller
    /// surfaces the message; dialogs stay open so the input can be fixed.
    pub fn apply(&mut self, intent: Intent) -> Result<Option<Effect>, ModelError> {
        match intent {
            Intent::BeginAddWord => {
                self.session.begin_add_word();
                Ok(None)
            }
            Intent::BeginAddLanguage => {
                self.session.begin_add_language();
                Ok(None)
            }
            Intent::InputChar(c) => self.input_edit(|text| text.push(c)),
            Intent::InputBackspace => self.input_edit(|text| {
                text.pop();
            }),
            Intent::Commit => self.commit(),
            Intent::Cancel => {
                match self.session.mode() {
                    EditMode::AddingWord | EditMode::AddingLanguage => {
                        self.session.close_dialog()
                    }
                    EditMode::Renaming(_) => self.session.clear_rename(),
                    // the pick highlight drops, but only Closed clears the
                    // pending slot
                    EditMode::PickingIcon(_) => self.session.end_icon_pick(),
                    EditMode::Idle => {}
                }
                Ok(None)
            }
            Intent::ToggleRename(index) => {
                self.id_at(index)?;
                self.session.toggle_rename(index);
                Ok(None)
            }
            Intent::BeginIconPick(index) => {
                let id = self.id_at(index)?;
                self.session.begin_icon_pick(index);
                self.bridge.begin_pick(id);
                Ok(Some(Effect::StartPicker(id)))
            }
            Intent::ClearIcon(id) => {
                self.model.registry.set_icon(id, None)?;
                Ok(None)
            }
            Intent::RemoveLanguage(id) => {
                self.model.remove_language(id)?;
                // row indices shifted under any inline edit highlight
                self.session.clear_rename();
                if let Some(index) = self.session.picking_index() {
                    if index >= self.model.registry.len() {
                        self.session.end_icon_pick();
                    }
                }
                Ok(None)
            }
            Intent::ReorderLanguage { from, to } => {
                self.model.registry.reorder(from, to)?;
                // live rename keystrokes must not retarget a shifted row
                self.session.clear_rename();
                Ok(None)
            }
            Intent::RemoveWord(key) => {
                self.model.words.remove_word(&key)?;
                Ok(None)
            }
            Intent::SetTranslation {
                key,
                language,
                text,
            } => {
                self.model.set_translation(&key, language, text)?;
                Ok(None)
            }
        }
    }

    /// Apply one signal from the external picker surface. Closing the
    /// surface drops the row highlight along with the pending slot.
    pub fn on_picker_event(&mut self, event: PickerEvent) {
        let closed = event == PickerEvent::Closed;
        self.bridge.apply(&mut self.model.registry, event);
        if closed {
            self.session.end_icon_pick();
        }
    }

    /// Route a character edit to wherever the session says input goes:
    /// the dialog buffer, or the renamed language's live name.
    fn input_edit(
        &mut self,
        edit: impl FnOnce(&mut String),
    ) -> Result<Option<Effect>, ModelError> {
        match self.session.mode() {
            EditMode::AddingWord | EditMode::AddingLanguage => {
                edit(&mut self.session.input);
                Ok(None)
            }
            EditMode::Renaming(index) => {
                let id = self.id_at(index)?;
                let mut name = self
                    .model
                    .registry
                    .get(id)
                    .map(|l| l.name.clone())
                    .unwrap_or_default();
                edit(&mut name);
                self.model.registry.rename(id, name)?;
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn commit(&mut self) -> Result<Option<Effect>, ModelError> {
        match self.session.mode() {
            EditMode::AddingWord => {
                let key = self.session.input.clone();
                self.model.words.add_word(key)?;
                self.session.close_dialog();
                Ok(None)
            }
            EditMode::AddingLanguage => {
                let name = self.session.input.clone();
                self.model.registry.add(name);
                self.session.close_dialog();
                Ok(None)
            }
            // renames are already applied; commit just ends the flow
            EditMode::Renaming(_) => {
                self.session.clear_rename();
                Ok(None)
            }
            _ => Ok(None),
        }
    }

    fn id_at(&self, index: usize) -> Result<LanguageId, ModelError> {
        self.model.registry.id_at(index).ok_or(ModelError::IndexOutOfRange {
            index,
            len: self.model.registry.len(),
        })
    }
}

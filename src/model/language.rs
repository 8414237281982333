//! Language records and their identity.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Stable identifier for a language, minted by the registry when the
/// language is added.
///
/// Ids are never reused after removal and never derived from list position,
/// so reordering or deleting rows cannot retarget a word entry's records.
/// The id is part of the persisted snapshot and survives restarts.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub struct LanguageId(pub(crate) u64);

impl LanguageId {
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for LanguageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "lang#{}", self.0)
    }
}

/// Reference to an icon asset on disk.
///
/// The owning language holds the only copy; the reference is opaque to the
/// rest of the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IconRef(pub PathBuf);

impl IconRef {
    /// Short marker for list rows: the file stem, falling back to the full
    /// path when there is none.
    pub fn marker(&self) -> String {
        self.0
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.0.display().to_string())
    }
}

/// One language in the catalog: a mutable display name and an optional icon.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Language {
    pub id: LanguageId,
    pub name: String,
    pub icon: Option<IconRef>,
}

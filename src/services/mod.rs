//! External services.
//!
//! - picker: the deferred icon-selection bridge and the spawned task that
//!   drives the external picker surface

pub mod picker;

pub use picker::{PickerBridge, PickerEvent};

//! Event Handlers
//!
//! This module contains handlers for the two event sources:
//! - keyboard: user keyboard input
//! - picker: selections streaming back from the external icon picker

pub mod keyboard;
pub mod picker;

pub use keyboard::handle_key;
pub use picker::drain_picker_events;

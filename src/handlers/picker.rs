//! Picker Event Handler
//!
//! Applies selections from the external icon picker surface to the editor.

use loctui::services::picker::PickerEvent;
use tokio::sync::mpsc::error::TryRecvError;

use crate::App;

/// Drain every picker event that arrived since the last frame
/// (non-blocking). Events apply in arrival order; the receiver is dropped
/// once the surface reports closed.
pub fn drain_picker_events(app: &mut App) {
    let Some(mut rx) = app.picker_rx.take() else {
        return;
    };

    let mut open = true;
    while open {
        match rx.try_recv() {
            Ok(event) => {
                loctui::log_debug(&format!("Picker event: {:?}", event));
                let closed = event == PickerEvent::Closed;
                app.editor.on_picker_event(event);
                if closed {
                    open = false;
                } else {
                    app.mark_dirty();
                }
            }
            Err(TryRecvError::Empty) => break,
            Err(TryRecvError::Disconnected) => {
                // surface died without a close signal; clear the pending
                // slot anyway so the pick cannot hang forever
                app.editor.on_picker_event(PickerEvent::Closed);
                open = false;
            }
        }
    }

    if open {
        app.picker_rx = Some(rx);
    }
}

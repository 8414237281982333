//! Deferred icon selection.
//!
//! Picking an icon happens in an external surface that outlives any single
//! event-loop turn, so it is modeled as a two-message protocol against a
//! single pending slot:
//!
//! - `begin_pick` records which language is waiting for an icon
//! - `Updated` events write the current selection onto that language and
//!   keep the slot occupied (the surface may report several interim
//!   selections while the user browses)
//! - `Closed` clears the slot, selection or not, and is the only thing
//!   that clears it
//!
//! Both events are level-triggered: with no pending target they are no-ops,
//! never errors, so duplicate or stray signals from the surface are
//! harmless. Events are applied in arrival order by the host event loop;
//! sequencing, not locking, is the consistency mechanism.

use std::path::PathBuf;
use std::process::Stdio;

use anyhow::{Context, Result};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::process::Command;
use tokio::sync::mpsc;

use crate::model::{IconRef, LanguageId, LanguageRegistry};

/// A signal from the external picker surface.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The user's current selection (interim or final).
    Updated(IconRef),
    /// The surface closed, with or without a final selection.
    Closed,
}

/// The single-outstanding-request slot for icon picks.
#[derive(Debug, Clone, Default)]
pub struct PickerBridge {
    pending: Option<LanguageId>,
}

impl PickerBridge {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `id` as the pending target. A pick already pending is
    /// silently replaced without being resolved; the last request wins.
    pub fn begin_pick(&mut self, id: LanguageId) {
        self.pending = Some(id);
    }

    /// The language waiting for an icon, if any.
    pub fn pending(&self) -> Option<LanguageId> {
        self.pending
    }

    /// Apply one signal from the surface against the registry.
    ///
    /// `Updated` forwards the icon to the pending language and leaves the
    /// slot occupied. A target that left the registry while the surface was
    /// open is skipped (the signal is stale, not wrong). `Closed` empties
    /// the slot unconditionally.
    pub fn apply(&mut self, registry: &mut LanguageRegistry, event: PickerEvent) {
        match event {
            PickerEvent::Updated(icon) => {
                if let Some(id) = self.pending {
                    if registry.contains(id) {
                        let _ = registry.set_icon(id, Some(icon));
                    }
                }
            }
            PickerEvent::Closed => {
                self.pending = None;
            }
        }
    }
}

/// Launch the external picker surface and stream its selections back.
///
/// The configured command runs through the shell. Every non-empty line it
/// prints to stdout is one selection; process exit is the closed signal.
/// `Closed` is always delivered, including when the command fails to start,
/// so the pending slot cannot leak.
pub fn spawn_picker(command: String) -> mpsc::UnboundedReceiver<PickerEvent> {
    let (tx, rx) = mpsc::unbounded_channel();

    tokio::spawn(async move {
        if let Err(e) = picker_loop(&command, &tx).await {
            crate::log_debug(&format!("Picker surface error: {}", e));
        }
        let _ = tx.send(PickerEvent::Closed);
    });

    rx
}

async fn picker_loop(command: &str, tx: &mpsc::UnboundedSender<PickerEvent>) -> Result<()> {
    let mut child = Command::new("sh")
        .arg("-c")
        .arg(command)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .spawn()
        .with_context(|| format!("failed to launch picker command {:?}", command))?;

    let stdout = child
        .stdout
        .take()
        .context("picker stdout was not captured")?;
    let mut lines = BufReader::new(stdout).lines();

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let _ = tx.send(PickerEvent::Updated(IconRef(PathBuf::from(line))));
    }

    let status = child.wait().await?;
    crate::log_debug(&format!("Picker surface exited: {}", status));
    Ok(())
}

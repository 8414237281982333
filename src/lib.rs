//! Localization Catalog Editor Library
//!
//! Exposes the editor core (model, session, picker bridge, persistence)
//! for the binary and for integration tests.

pub mod config;
pub mod editor;
pub mod messages;
pub mod model;
pub mod persistence;
pub mod services;
pub mod session;

use std::sync::atomic::{AtomicBool, Ordering};

/// Global flag for debug logging, set once at startup from --debug.
pub static DEBUG_MODE: AtomicBool = AtomicBool::new(false);

/// Append a line to the debug log. No-op unless debug mode is enabled.
pub fn log_debug(msg: &str) {
    if !DEBUG_MODE.load(Ordering::Relaxed) {
        return;
    }

    use std::fs::OpenOptions;
    use std::io::Write;
    if let Ok(mut file) = OpenOptions::new()
        .create(true)
        .append(true)
        .open("/tmp/loctui-debug.log")
    {
        let _ = writeln!(
            file,
            "[{}] {}",
            chrono::Local::now().format("%H:%M:%S%.3f"),
            msg
        );
    }
}

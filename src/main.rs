use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io,
    path::PathBuf,
    sync::atomic::Ordering,
    time::{Duration, Instant},
};

use loctui::config::{self, Config};
use loctui::editor::{Editor, Effect};
use loctui::log_debug;
use loctui::messages::Intent;
use loctui::model::LanguageId;
use loctui::persistence;
use loctui::services::picker::{self, PickerEvent};
use loctui::DEBUG_MODE;

mod handlers;
mod ui;

/// Terminal editor for localization catalogs
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to /tmp/loctui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Path to config file (default: platform-specific, then ./config.yaml)
    #[arg(short, long)]
    config: Option<String>,

    /// Path to the catalog file (default: platform data dir)
    #[arg(long)]
    data: Option<String>,
}

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Languages,
    Words,
}

pub struct App {
    pub editor: Editor,
    pub config: Config,
    data_path: PathBuf,

    /// Receiver for the running external picker surface, if one is open.
    pub picker_rx: Option<tokio::sync::mpsc::UnboundedReceiver<PickerEvent>>,

    pub focus: Panel,
    pub selected_language: usize,
    pub selected_word: usize,
    pub selected_column: usize,
    /// Keystrokes edit the selected translation cell live.
    pub cell_edit: bool,

    pub toast: Option<(String, Instant)>,
    pub dirty: bool,
    should_quit: bool,
}

impl App {
    fn new(config: Config, data_path: PathBuf) -> Result<Self> {
        let model = persistence::load_or_create(&data_path)?;
        log_debug(&format!(
            "Loaded catalog from {}: {} languages, {} words",
            data_path.display(),
            model.registry.len(),
            model.words.len()
        ));

        Ok(Self {
            editor: Editor::new(model),
            config,
            data_path,
            picker_rx: None,
            focus: Panel::Languages,
            selected_language: 0,
            selected_word: 0,
            selected_column: 0,
            cell_edit: false,
            toast: None,
            dirty: false,
            should_quit: false,
        })
    }

    /// Route an intent through the editor core and surface the outcome.
    pub fn dispatch(&mut self, intent: Intent) {
        let mutates = matches!(
            intent,
            Intent::Commit
                | Intent::InputChar(_)
                | Intent::InputBackspace
                | Intent::ClearIcon(_)
                | Intent::RemoveLanguage(_)
                | Intent::ReorderLanguage { .. }
                | Intent::RemoveWord(_)
                | Intent::SetTranslation { .. }
        );

        match self.editor.apply(intent) {
            Ok(Some(Effect::StartPicker(id))) => self.launch_picker(id),
            Ok(None) => {
                if mutates {
                    self.mark_dirty();
                }
            }
            Err(e) => self.show_toast(e.to_string()),
        }

        self.clamp_selections();
    }

    fn launch_picker(&mut self, id: LanguageId) {
        // surface already open: the pending slot was retargeted, nothing
        // new to spawn
        if self.picker_rx.is_some() {
            return;
        }
        match self.config.picker_command.clone() {
            Some(command) => {
                log_debug(&format!("Launching picker surface for {}", id));
                self.picker_rx = Some(picker::spawn_picker(command));
            }
            None => {
                // no surface will ever close this pick; roll it back
                self.editor.on_picker_event(PickerEvent::Closed);
                self.show_toast("No picker_command configured".to_string());
            }
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast = Some((message, Instant::now()));
    }

    pub fn mark_dirty(&mut self) {
        self.dirty = true;
        if self.config.autosave {
            self.save_catalog();
        }
    }

    pub fn save_catalog(&mut self) {
        match persistence::save(&self.data_path, &self.editor.model) {
            Ok(()) => {
                self.dirty = false;
                if !self.config.autosave {
                    self.show_toast("Saved".to_string());
                }
            }
            Err(e) => {
                log_debug(&format!("Save failed: {}", e));
                self.show_toast(format!("Save failed: {}", e));
            }
        }
    }

    pub fn quit(&mut self) {
        if self.dirty {
            self.save_catalog();
        }
        self.should_quit = true;
    }

    pub fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Panel::Languages => Panel::Words,
            Panel::Words => Panel::Languages,
        };
        self.cell_edit = false;
    }

    pub fn select_prev_language(&mut self) {
        self.selected_language = self.selected_language.saturating_sub(1);
    }

    pub fn select_next_language(&mut self) {
        let len = self.editor.model.registry.len();
        if len > 0 && self.selected_language + 1 < len {
            self.selected_language += 1;
        }
    }

    pub fn select_prev_word(&mut self) {
        self.selected_word = self.selected_word.saturating_sub(1);
    }

    pub fn select_next_word(&mut self) {
        let len = self.editor.model.words.len();
        if len > 0 && self.selected_word + 1 < len {
            self.selected_word += 1;
        }
    }

    pub fn select_prev_column(&mut self) {
        self.selected_column = self.selected_column.saturating_sub(1);
    }

    pub fn select_next_column(&mut self) {
        let len = self.editor.model.registry.len();
        if len > 0 && self.selected_column + 1 < len {
            self.selected_column += 1;
        }
    }

    pub fn selected_language_id(&self) -> Option<LanguageId> {
        self.editor.model.registry.id_at(self.selected_language)
    }

    pub fn column_language_id(&self) -> Option<LanguageId> {
        self.editor.model.registry.id_at(self.selected_column)
    }

    pub fn selected_word_key(&self) -> Option<String> {
        self.editor
            .model
            .words
            .keys()
            .nth(self.selected_word)
            .map(str::to_string)
    }

    /// Apply one live edit to the selected translation cell. The edit goes
    /// through the normal set-translation path, keystroke by keystroke.
    pub fn edit_selected_cell(&mut self, edit: impl FnOnce(&mut String)) {
        let (Some(key), Some(id)) = (self.selected_word_key(), self.column_language_id()) else {
            return;
        };
        let Ok(current) = self.editor.model.translation(&key, id) else {
            return;
        };
        let mut text = current.to_string();
        edit(&mut text);
        self.dispatch(Intent::SetTranslation {
            key,
            language: id,
            text,
        });
    }

    /// Keep selections inside the shrinking collections after removals.
    fn clamp_selections(&mut self) {
        let languages = self.editor.model.registry.len();
        if languages == 0 {
            self.selected_language = 0;
            self.selected_column = 0;
        } else {
            self.selected_language = self.selected_language.min(languages - 1);
            self.selected_column = self.selected_column.min(languages - 1);
        }

        let words = self.editor.model.words.len();
        if words == 0 {
            self.selected_word = 0;
            self.cell_edit = false;
        } else {
            self.selected_word = self.selected_word.min(words - 1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    DEBUG_MODE.store(args.debug, Ordering::Relaxed);
    if args.debug {
        log_debug("Debug mode enabled");
    }

    let config = config::load(args.config)?;
    let data_path = persistence::data_file_path(
        args.data.as_deref().or(config.data_path.as_deref()),
    )?;
    log_debug(&format!("Catalog path: {}", data_path.display()));

    let mut app = App::new(config, data_path)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app with error handler
    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            ui::render(f, app);
        })?;

        // Auto-dismiss toast after 1.5 seconds
        if let Some((_, shown_at)) = app.toast {
            if shown_at.elapsed().as_millis() >= 1500 {
                app.toast = None;
            }
        }

        if app.should_quit {
            break;
        }

        // Apply selections streaming back from the picker (non-blocking)
        handlers::drain_picker_events(app);

        if event::poll(Duration::from_millis(250))? {
            if let Event::Key(key) = event::read()? {
                handlers::handle_key(app, key);
            }
        }
    }

    Ok(())
}

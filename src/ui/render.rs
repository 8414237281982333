use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::Frame;

use crate::App;

/// Render the whole screen: language panel on top, word table below,
/// status bar at the bottom, dialogs over everything.
pub fn render(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(language_panel_height(app)),
            Constraint::Min(5),
            Constraint::Length(1),
        ])
        .split(f.area());

    super::language_list::render(f, app, chunks[0]);
    super::word_table::render(f, app, chunks[1]);
    super::status_bar::render(f, app, chunks[2]);
    super::dialogs::render(f, app);
}

fn language_panel_height(app: &App) -> u16 {
    // rows plus borders, capped so the word table keeps room
    let rows = app.editor.model.registry.len().max(1) as u16;
    (rows + 2).min(10)
}

//! Input dialogs for adding words and languages.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use loctui::session::EditMode;

use crate::App;

/// Render the active input dialog, if any, centered over the panels.
pub fn render(f: &mut Frame, app: &App) {
    let (title, prompt) = match app.editor.session.mode() {
        EditMode::AddingWord => ("Add Word", "Key for the new word entry:"),
        EditMode::AddingLanguage => ("Add Language", "Name for the new language:"),
        _ => return,
    };

    let area = f.area();
    let width = 46.min(area.width.saturating_sub(2));
    let height = 6;
    let dialog_area = Rect {
        x: (area.width.saturating_sub(width)) / 2,
        y: (area.height.saturating_sub(height)) / 2,
        width,
        height,
    };

    let lines = vec![
        Line::from(Span::raw(prompt)),
        Line::from(Span::styled(
            format!("{}\u{258f}", app.editor.session.input),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "Enter to create, Esc to cancel",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let dialog = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(Clear, dialog_area);
    f.render_widget(dialog, dialog_area);
}

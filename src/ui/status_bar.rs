//! Bottom status bar: toast messages, or key hints for the current state.

use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use loctui::session::EditMode;

use crate::{App, Panel};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    if let Some((message, _)) = &app.toast {
        let toast = Paragraph::new(Span::styled(
            format!(" {}", message),
            Style::default().fg(Color::Black).bg(Color::Yellow),
        ));
        f.render_widget(toast, area);
        return;
    }

    let hints = match app.editor.session.mode() {
        EditMode::AddingWord | EditMode::AddingLanguage => {
            "Enter create | Esc cancel".to_string()
        }
        EditMode::Renaming(_) => "type to rename | Enter/Esc done".to_string(),
        _ if app.cell_edit => "type translation | Enter/Esc done".to_string(),
        _ => match app.focus {
            Panel::Languages => {
                "n lang | w word | e rename | i icon | x clear icon | d delete | [/] move | Tab words | ^S save | q quit"
                    .to_string()
            }
            Panel::Words => {
                "w word | e edit cell | d delete | arrows select | Tab languages | ^S save | q quit"
                    .to_string()
            }
        },
    };

    let dirty_marker = if app.dirty { "*" } else { " " };
    let bar = Paragraph::new(Span::styled(
        format!("{} {}", dirty_marker, hints),
        Style::default().fg(Color::Gray),
    ));
    f.render_widget(bar, area);
}

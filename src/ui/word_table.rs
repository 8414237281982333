//! Word panel.
//!
//! A table of word keys with one column per language, in registry order.
//! The selected cell is highlighted when the panel has focus; a live edit
//! shows a text cursor in place.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, Borders, Cell, Paragraph, Row, Table};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

use crate::{App, Panel};

const KEY_COLUMN_WIDTH: u16 = 20;
const CELL_TEXT_WIDTH: usize = 24;

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Panel::Words;
    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Words")
        .border_style(border_style);

    let languages = app.editor.model.registry.languages();
    let entries = app.editor.model.words.entries();

    if entries.is_empty() {
        let hint = Paragraph::new(Span::styled(
            "no words yet, press 'w' to add one",
            Style::default().fg(Color::DarkGray),
        ))
        .block(block);
        f.render_widget(hint, area);
        return;
    }

    let mut header_cells = vec![Cell::from("Key").style(
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )];
    for language in languages {
        let label = if language.name.is_empty() {
            "(unnamed)".to_string()
        } else {
            language.name.clone()
        };
        header_cells.push(Cell::from(label).style(Style::default().fg(Color::Gray)));
    }

    let mut rows = Vec::with_capacity(entries.len());
    for (word_index, entry) in entries.iter().enumerate() {
        let mut cells =
            vec![Cell::from(truncate_cell(entry.key(), KEY_COLUMN_WIDTH as usize))];
        for (column, language) in languages.iter().enumerate() {
            let selected = focused
                && word_index == app.selected_word
                && column == app.selected_column;
            let text = entry.translation(language.id);
            let mut shown = truncate_cell(text, CELL_TEXT_WIDTH);
            if selected && app.cell_edit {
                shown.push('\u{258f}');
            }
            let style = if selected {
                Style::default()
                    .bg(Color::DarkGray)
                    .add_modifier(Modifier::BOLD)
            } else if text.is_empty() {
                Style::default().fg(Color::DarkGray)
            } else {
                Style::default()
            };
            cells.push(Cell::from(shown).style(style));
        }
        rows.push(Row::new(cells));
    }

    let mut widths = vec![Constraint::Length(KEY_COLUMN_WIDTH)];
    widths.extend(
        std::iter::repeat(Constraint::Min(10)).take(languages.len()),
    );

    let table = Table::new(rows, widths)
        .header(Row::new(header_cells))
        .block(block)
        .column_spacing(1);
    f.render_widget(table, area);
}

/// Clip cell text to a display width, ending with an ellipsis when cut.
fn truncate_cell(text: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    if text.width() <= max_width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        // keep one cell for the ellipsis
        if used + w + 1 > max_width {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('\u{2026}');
    out
}

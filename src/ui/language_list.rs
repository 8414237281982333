//! Language panel.
//!
//! One row per language, in registry order. The row being renamed shows a
//! text cursor; the row with a pick in flight is marked; icons render as
//! their file stem (the reference is opaque, there is nothing to preview
//! in a terminal cell).

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState};
use ratatui::Frame;

use crate::{App, Panel};

pub fn render(f: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Panel::Languages;
    let languages = app.editor.model.registry.languages();

    let mut items: Vec<ListItem> = Vec::with_capacity(languages.len());
    for (index, language) in languages.iter().enumerate() {
        let mut spans = Vec::new();

        if let Some(icon) = &language.icon {
            spans.push(Span::styled(
                format!("[{}] ", icon.marker()),
                Style::default().fg(Color::Cyan),
            ));
        }

        if app.editor.session.renaming_index() == Some(index) {
            spans.push(Span::styled(
                format!("{}\u{258f}", language.name),
                Style::default()
                    .fg(Color::Yellow)
                    .add_modifier(Modifier::BOLD),
            ));
        } else if language.name.is_empty() {
            spans.push(Span::styled(
                "(unnamed)",
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            spans.push(Span::raw(language.name.clone()));
        }

        if app.editor.session.picking_index() == Some(index) {
            spans.push(Span::styled(
                "  [picking icon...]",
                Style::default().fg(Color::Magenta),
            ));
        }

        items.push(ListItem::new(Line::from(spans)));
    }

    if items.is_empty() {
        items.push(ListItem::new(Span::styled(
            "no languages yet, press 'n' to add one",
            Style::default().fg(Color::DarkGray),
        )));
    }

    let border_style = if focused {
        Style::default().fg(Color::Green)
    } else {
        Style::default()
    };

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Languages")
                .border_style(border_style),
        )
        .highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    if !app.editor.model.registry.is_empty() {
        state.select(Some(
            app.selected_language
                .min(app.editor.model.registry.len() - 1),
        ));
    }
    f.render_stateful_widget(list, area, &mut state);
}

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::models::{DuaCategory, DuaLibrary};
use crate::tui::theme;

#[allow(clippy::too_many_arguments)]
pub fn render(
    frame: &mut Frame,
    area: Rect,
    library: &DuaLibrary,
    query: &str,
    category: Option<DuaCategory>,
    selected: usize,
    expanded: bool,
    searching: bool,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // search bar
            Constraint::Length(1), // category chips
            Constraint::Min(0),    // list
        ])
        .split(area);

    draw_search(frame, chunks[0], query, searching);
    draw_chips(frame, chunks[1], category);
    draw_list(frame, chunks[2], library, query, category, selected, expanded);
}

fn draw_search(frame: &mut Frame, area: Rect, query: &str, searching: bool) {
    let border_style = if searching {
        theme::amber()
    } else {
        ratatui::style::Style::default().fg(theme::BORDER)
    };

    let block = Block::default()
        .title(Span::styled(" Search ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_style)
        .style(theme::surface());

    let mut spans = vec![Span::styled(" ", theme::dim())];
    if query.is_empty() && !searching {
        spans.push(Span::styled("Press / to search duas...", theme::dim()));
    } else {
        spans.push(Span::styled(query.to_string(), theme::bold()));
    }
    if searching {
        spans.push(Span::styled("█", theme::amber())); // block cursor
    }

    frame.render_widget(Paragraph::new(Line::from(spans)).block(block), area);
}

fn draw_chips(frame: &mut Frame, area: Rect, category: Option<DuaCategory>) {
    let mut spans = vec![{
        let style = if category.is_none() {
            theme::emerald().add_modifier(Modifier::BOLD)
        } else {
            theme::dim()
        };
        Span::styled("  All ", style)
    }];
    for c in DuaCategory::all() {
        let style = if category == Some(c) {
            theme::emerald().add_modifier(Modifier::BOLD)
        } else {
            theme::dim()
        };
        spans.push(Span::styled("· ", theme::dim()));
        spans.push(Span::styled(format!("{} ", c.as_str()), style));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn draw_list(
    frame: &mut Frame,
    area: Rect,
    library: &DuaLibrary,
    query: &str,
    category: Option<DuaCategory>,
    selected: usize,
    expanded: bool,
) {
    let hits = library.filtered(query, category);

    let block = Block::default()
        .title(Span::styled(
            format!(" Duas & Supplications ({}) ", hits.len()),
            theme::gold(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    if hits.is_empty() {
        let text = vec![
            Line::from(""),
            Line::from(Span::styled("  No duas found", theme::dim())),
        ];
        frame.render_widget(Paragraph::new(text).block(block), area);
        return;
    }

    let items: Vec<ListItem> = hits
        .iter()
        .enumerate()
        .map(|(i, dua)| {
            let is_selected = i == selected;

            let title_style = if is_selected {
                theme::gold().add_modifier(Modifier::BOLD)
            } else {
                theme::bold()
            };
            let heart = if library.is_favorite(dua.id) {
                Span::styled(" ♥", theme::rose())
            } else {
                Span::styled("", theme::dim())
            };

            let mut lines = vec![Line::from(vec![
                Span::styled(if is_selected { "▸ " } else { "  " }, theme::emerald()),
                Span::styled(format!("{:<18}", dua.title), title_style),
                Span::styled(format!("{:<18}", dua.title_arabic), theme::amber()),
                Span::styled(dua.category.as_str(), theme::dim()),
                heart,
            ])];

            if is_selected && expanded {
                lines.push(Line::from(Span::styled(
                    format!("      {}", dua.arabic),
                    theme::amber(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("      {}", dua.transliteration),
                    theme::emerald(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("      {}", dua.translation),
                    theme::dim(),
                )));
                lines.push(Line::from(Span::styled(
                    format!("      Reference: {}", dua.reference),
                    theme::dim(),
                )));
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

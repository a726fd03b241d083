use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::models::tasbih::{COMMON_DHIKR, TARGET_OPTIONS, TasbihCounter};
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, counter: &TasbihCounter) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(7), // common dhikr
            Constraint::Min(0),    // counter
        ])
        .split(area);

    draw_phrases(frame, chunks[0]);
    draw_counter(frame, chunks[1], counter);
}

fn draw_phrases(frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(Span::styled(" Common Dhikr ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let lines: Vec<Line> = COMMON_DHIKR
        .iter()
        .map(|phrase| {
            // Arabic glyph widths vary; pad by display width so the
            // transliteration column lines up.
            let pad = 26usize.saturating_sub(phrase.arabic.width());
            Line::from(vec![
                Span::styled(format!("  {}{}", phrase.arabic, " ".repeat(pad)), theme::amber()),
                Span::styled(format!("{:<18}", phrase.transliteration), theme::emerald()),
                Span::styled(phrase.meaning, theme::dim()),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn draw_counter(frame: &mut Frame, area: Rect, counter: &TasbihCounter) {
    let block = Block::default()
        .title(Span::styled(" Digital Tasbih ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let count_style = if counter.count >= counter.target {
        theme::gold().add_modifier(Modifier::BOLD)
    } else {
        theme::emerald().add_modifier(Modifier::BOLD)
    };

    let mut target_spans = vec![Span::styled("Target  ", theme::dim())];
    for &option in &TARGET_OPTIONS {
        let style = if option == counter.target {
            theme::amber().add_modifier(Modifier::BOLD)
        } else {
            theme::dim()
        };
        target_spans.push(Span::styled(format!(" {} ", option), style));
    }

    let text = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{}", counter.count), count_style),
            Span::styled(format!("  / {}", counter.target), theme::dim()),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            progress_bar(counter.count, counter.target, 30),
            theme::emerald(),
        )),
        Line::from(""),
        Line::from(target_spans),
        Line::from(""),
        Line::from(vec![
            Span::styled("Total ", theme::dim()),
            Span::styled(format!("{}", counter.total), theme::amber()),
            Span::styled("   Cycles ", theme::dim()),
            Span::styled(format!("{}", counter.cycles), theme::amber()),
        ]),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

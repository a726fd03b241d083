use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;

/// "Coming soon" card for the Quran and Ramadan tabs.
pub fn render(frame: &mut Frame, area: Rect, title: &str, note: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let text = vec![
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled(
            title.to_string(),
            theme::gold().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(note.to_string(), theme::dim())),
    ];

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

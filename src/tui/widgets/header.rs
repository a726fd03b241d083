use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;
use crate::utils::format::{date_label, gregorian_label};
use crate::utils::hijri::hijri_date;

pub fn render(frame: &mut Frame, area: Rect, location: &str, today: NaiveDate, offset: i64) {
    let title_line = Line::from(vec![
        Span::styled("  ☪  Prayer Times  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("mihrab", theme::gold()),
    ]);

    let basmala_line = Line::from(Span::styled(
        "بِسْمِ ٱللَّٰهِ ٱلرَّحْمَٰنِ ٱلرَّحِيمِ",
        theme::dim(),
    ));

    let location_line = Line::from(vec![
        Span::styled("Location  ", theme::dim()),
        Span::styled(location, theme::emerald()),
    ]);

    let label_style = if offset == 0 {
        theme::emerald().add_modifier(Modifier::BOLD)
    } else {
        theme::amber().add_modifier(Modifier::BOLD)
    };
    let nav_line = Line::from(vec![
        Span::styled("◀ ", theme::emerald()),
        Span::styled(format!("  {}  ", date_label(offset)), label_style),
        Span::styled(" ▶", theme::emerald()),
    ]);

    let date_line = Line::from(vec![
        Span::styled(hijri_date(offset).formatted(), theme::amber()),
        Span::styled("  ·  ", theme::dim()),
        Span::styled(gregorian_label(today, offset), theme::dim()),
    ]);

    let text = vec![
        title_line,
        basmala_line,
        Line::from(""),
        location_line,
        nav_line,
        date_line,
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::gold().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

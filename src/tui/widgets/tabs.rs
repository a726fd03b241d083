use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::Tab;
use crate::tui::theme;

/// The four primary destinations plus the active feature tab when one
/// of the Home grid features is open.
pub fn render(frame: &mut Frame, area: Rect, active: Tab) {
    let mut entries = vec![
        ('1', Tab::Home),
        ('2', Tab::Qibla),
        ('3', Tab::Quran),
        ('5', Tab::More),
    ];
    match active {
        Tab::Ramadan => entries.push(('4', Tab::Ramadan)),
        Tab::Tasbih => entries.push(('6', Tab::Tasbih)),
        Tab::Dua => entries.push(('7', Tab::Dua)),
        _ => {}
    }

    let mut spans = Vec::new();
    for (key, tab) in entries {
        let style = if tab == active {
            theme::emerald().add_modifier(Modifier::BOLD)
        } else {
            theme::dim()
        };
        spans.push(Span::styled(format!("[{}] ", key), theme::gold()));
        spans.push(Span::styled(format!("{}   ", tab.label()), style));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

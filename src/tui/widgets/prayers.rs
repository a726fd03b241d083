use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::prayer_times::{NextPrayerInfo, PrayerSchedule};
use crate::tui::theme;
use crate::utils::format::format_time;

pub fn render(frame: &mut Frame, area: Rect, schedule: &PrayerSchedule, info: &NextPrayerInfo) {
    let block = Block::default()
        .title(Span::styled(" Prayer Times ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let items: Vec<ListItem> = schedule
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| {
            let is_next = i == info.next;
            let is_passed = info.current.is_some_and(|current| i <= current);

            let name_style = if is_next {
                theme::emerald().add_modifier(Modifier::BOLD)
            } else if is_passed {
                theme::dim()
            } else {
                theme::bold()
            };

            let time_style = if is_next {
                theme::amber().add_modifier(Modifier::BOLD)
            } else if is_passed {
                theme::dim()
            } else {
                theme::emerald()
            };

            let marker = if is_next {
                Span::styled("  coming next", theme::emerald())
            } else if is_passed {
                Span::styled("  ✓", theme::emerald())
            } else {
                Span::styled("", theme::dim())
            };

            let line = Line::from(vec![
                Span::styled(format!("  {:<9}", entry.name.display_name()), name_style),
                Span::styled(format!("{:<8}", entry.arabic), theme::dim()),
                Span::styled(format_time(entry.time), time_style),
                marker,
            ]);

            ListItem::new(line)
        })
        .collect();

    let list = List::new(items).block(block);
    frame.render_widget(list, area);
}

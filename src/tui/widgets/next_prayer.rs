use chrono::NaiveTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::prayer_times::{NextPrayerInfo, PrayerSchedule};
use crate::tui::theme;
use crate::utils::format::{format_clock, format_time};

pub fn render(
    frame: &mut Frame,
    area: Rect,
    schedule: &PrayerSchedule,
    info: &NextPrayerInfo,
    now: NaiveTime,
) {
    let next = &schedule.entries()[info.next];

    let block = Block::default()
        .title(Span::styled(" Next Prayer ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // current time
            Constraint::Length(1), // divider
            Constraint::Length(1), // next prayer name
            Constraint::Length(1), // spacer
            Constraint::Min(0),    // big countdown
        ])
        .split(inner);

    let clock_line = Line::from(vec![
        Span::styled("Current Time  ", theme::dim()),
        Span::styled(format_clock(now), theme::bold()),
    ]);
    frame.render_widget(
        Paragraph::new(clock_line).alignment(Alignment::Center),
        chunks[0],
    );

    let divider = Line::from(Span::styled("─── ☪ ───", theme::dim()));
    frame.render_widget(
        Paragraph::new(divider).alignment(Alignment::Center),
        chunks[1],
    );

    let name_line = Line::from(vec![
        Span::styled(
            next.name.display_name(),
            theme::emerald().add_modifier(Modifier::BOLD),
        ),
        Span::styled(format!("  {}  ", next.arabic), theme::amber()),
        Span::styled(format!("at {}", format_time(next.time)), theme::dim()),
    ]);
    frame.render_widget(
        Paragraph::new(name_line).alignment(Alignment::Center),
        chunks[2],
    );

    let countdown = format!(
        "{:02}:{:02}:{:02}",
        info.remaining.hours, info.remaining.minutes, info.remaining.seconds
    );

    // Quadrant pixels: each glyph is 4 cells wide and 4 rows tall.
    let digits_width = (countdown.len() * 4) as u16;
    let digits = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::emerald())
        .lines(vec![countdown.into()])
        .build();

    let digit_area = centered(chunks[4], digits_width);
    frame.render_widget(digits, digit_area);
}

fn centered(area: Rect, width: u16) -> Rect {
    let width = width.min(area.width);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y,
        width,
        height: area.height,
    }
}

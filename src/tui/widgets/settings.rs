use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::models::settings::{
    ACCENT_COLORS, ADHAN_VOICES, ASR_METHODS, CALCULATION_METHODS, HIGH_LATITUDE_RULES, LANGUAGES,
    SettingOption, THEMES,
};
use crate::models::{PrayerName, SettingsState};
use crate::tui::app::Modal;
use crate::tui::theme;
use crate::utils::format::progress_bar;

/// Actionable rows of the settings surface, in display order. Saved
/// locations expand to one row each, so the list is rebuilt whenever
/// one is added or deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsRow {
    Language,
    Theme,
    Accent,
    Notifications,
    CurrentLocation,
    AddLocation,
    SavedLocation(usize),
    Calculation,
    Asr,
    HighLatitude,
    Adjustments,
    Audio,
    About,
}

pub fn settings_rows(settings: &SettingsState) -> Vec<SettingsRow> {
    let mut rows = vec![
        SettingsRow::Language,
        SettingsRow::Theme,
        SettingsRow::Accent,
        SettingsRow::Notifications,
        SettingsRow::CurrentLocation,
        SettingsRow::AddLocation,
    ];
    for i in 0..settings.saved_locations.len() {
        rows.push(SettingsRow::SavedLocation(i));
    }
    rows.extend([
        SettingsRow::Calculation,
        SettingsRow::Asr,
        SettingsRow::HighLatitude,
        SettingsRow::Adjustments,
        SettingsRow::Audio,
        SettingsRow::About,
    ]);
    rows
}

pub fn render(frame: &mut Frame, area: Rect, settings: &SettingsState, selected: usize) {
    let block = Block::default()
        .title(Span::styled(" Settings ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(ratatui::style::Style::default().fg(theme::BORDER))
        .style(theme::surface());

    let rows = settings_rows(settings);
    let mut lines = Vec::new();
    let mut index = 0usize;

    let mut push_row = |lines: &mut Vec<Line>, label: String, value: String| {
        let is_selected = index == selected;
        let marker = if is_selected { "▸ " } else { "  " };
        let label_style = if is_selected {
            theme::gold().add_modifier(Modifier::BOLD)
        } else {
            theme::bold()
        };
        lines.push(Line::from(vec![
            Span::styled(marker.to_string(), theme::emerald()),
            Span::styled(format!("{:<26}", label), label_style),
            Span::styled(value, theme::dim()),
        ]));
        index += 1;
    };

    lines.push(Line::from(Span::styled("  General", theme::gold())));
    for row in &rows {
        match row {
            SettingsRow::Language => push_row(
                &mut lines,
                "Language".to_string(),
                LANGUAGES[settings.language].to_string(),
            ),
            SettingsRow::Theme => push_row(
                &mut lines,
                "Theme".to_string(),
                THEMES[settings.theme].to_string(),
            ),
            SettingsRow::Accent => push_row(
                &mut lines,
                "Accent Color".to_string(),
                ACCENT_COLORS[settings.accent_color].to_string(),
            ),
            SettingsRow::Notifications => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("  Notifications", theme::gold())));
                let state = if settings.notifications_enabled {
                    "on ●"
                } else {
                    "off ○"
                };
                push_row(&mut lines, "Enable Notifications".to_string(), state.to_string());
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("  Location", theme::gold())));
            }
            SettingsRow::CurrentLocation => push_row(
                &mut lines,
                "Current Location".to_string(),
                "GPS unavailable".to_string(),
            ),
            SettingsRow::AddLocation => {
                push_row(&mut lines, "Add Location".to_string(), String::new())
            }
            SettingsRow::SavedLocation(i) => {
                let name = settings
                    .saved_locations
                    .get(*i)
                    .map(|l| l.name.clone())
                    .unwrap_or_default();
                push_row(&mut lines, format!("  {}", name), "[Enter] remove".to_string());
            }
            SettingsRow::Calculation => {
                lines.push(Line::from(""));
                lines.push(Line::from(Span::styled("  Prayer Settings", theme::gold())));
                push_row(
                    &mut lines,
                    "Calculation Method".to_string(),
                    CALCULATION_METHODS[settings.calculation_method].to_string(),
                );
            }
            SettingsRow::Asr => push_row(
                &mut lines,
                "Asr Method".to_string(),
                ASR_METHODS[settings.asr_method].name.to_string(),
            ),
            SettingsRow::HighLatitude => push_row(
                &mut lines,
                "High Latitude".to_string(),
                HIGH_LATITUDE_RULES[settings.high_latitude].name.to_string(),
            ),
            SettingsRow::Adjustments => {
                let nudged = settings.adjustments.iter().filter(|&&m| m != 0).count();
                let value = if nudged == 0 {
                    "none".to_string()
                } else {
                    format!("{} adjusted", nudged)
                };
                push_row(&mut lines, "Prayer Adjustments".to_string(), value);
            }
            SettingsRow::Audio => {
                lines.push(Line::from(""));
                push_row(
                    &mut lines,
                    "Audio Settings".to_string(),
                    format!("adhan {}%", settings.adhan_volume),
                );
            }
            SettingsRow::About => push_row(&mut lines, "About".to_string(), String::new()),
        }
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

pub fn draw_modal(frame: &mut Frame, modal: Modal, settings: &SettingsState, selected: usize) {
    match modal {
        Modal::Language => {
            choice_modal(frame, " Select Language ", &LANGUAGES, settings.language, selected)
        }
        Modal::Theme => choice_modal(frame, " Select Theme ", &THEMES, settings.theme, selected),
        Modal::Accent => choice_modal(
            frame,
            " Accent Color ",
            &ACCENT_COLORS,
            settings.accent_color,
            selected,
        ),
        Modal::Calculation => choice_modal(
            frame,
            " Calculation Method ",
            &CALCULATION_METHODS,
            settings.calculation_method,
            selected,
        ),
        Modal::Asr => detailed_modal(frame, " Asr Method ", &ASR_METHODS, settings.asr_method, selected),
        Modal::HighLatitude => detailed_modal(
            frame,
            " High Latitude Rule ",
            &HIGH_LATITUDE_RULES,
            settings.high_latitude,
            selected,
        ),
        Modal::Adjustments => adjustments_modal(frame, settings, selected),
        Modal::Audio => audio_modal(frame, settings, selected),
        Modal::About => about_modal(frame),
        Modal::Help => {}
    }
}

fn popup_area(frame: &Frame, height: u16) -> Rect {
    let area = frame.area();
    Rect {
        x: area.width / 6,
        y: (area.height.saturating_sub(height)) / 2,
        width: area.width * 2 / 3,
        height: height.min(area.height),
    }
}

fn option_line(name: &str, is_current: bool, is_selected: bool) -> Line<'static> {
    let style = if is_selected {
        theme::gold().add_modifier(Modifier::BOLD)
    } else {
        theme::bold()
    };
    let check = if is_current {
        Span::styled("  ✓", theme::emerald())
    } else {
        Span::styled("", theme::dim())
    };
    Line::from(vec![
        Span::styled(if is_selected { "  ▸ " } else { "    " }, theme::emerald()),
        Span::styled(name.to_string(), style),
        check,
    ])
}

fn modal_block(title: &str) -> Block<'static> {
    Block::default()
        .title(Span::styled(title.to_string(), theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::amber())
        .style(theme::surface())
}

fn choice_modal(frame: &mut Frame, title: &str, options: &[&str], current: usize, selected: usize) {
    let area = popup_area(frame, options.len() as u16 + 4);
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (i, name) in options.iter().enumerate() {
        lines.push(option_line(name, i == current, i == selected));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [↑ ↓] select  ·  [Enter] apply  ·  [Esc] close",
        theme::dim(),
    )));

    frame.render_widget(Paragraph::new(lines).block(modal_block(title)), area);
}

fn detailed_modal(
    frame: &mut Frame,
    title: &str,
    options: &[SettingOption],
    current: usize,
    selected: usize,
) {
    let area = popup_area(frame, options.len() as u16 * 2 + 4);
    frame.render_widget(Clear, area);

    let mut lines = vec![Line::from("")];
    for (i, option) in options.iter().enumerate() {
        lines.push(option_line(option.name, i == current, i == selected));
        lines.push(Line::from(Span::styled(
            format!("      {}", option.detail),
            theme::dim(),
        )));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [↑ ↓] select  ·  [Enter] apply  ·  [Esc] close",
        theme::dim(),
    )));

    frame.render_widget(Paragraph::new(lines).block(modal_block(title)), area);
}

fn adjustments_modal(frame: &mut Frame, settings: &SettingsState, selected: usize) {
    let area = popup_area(frame, 12);
    frame.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(Span::styled(
            "  Nudge each displayed time by whole minutes",
            theme::dim(),
        )),
        Line::from(""),
    ];
    for (i, name) in PrayerName::all().iter().enumerate() {
        let minutes = settings.adjustments[i];
        let value_style = match minutes {
            0 => theme::emerald(),
            m if m > 0 => theme::amber(),
            _ => theme::rose(),
        };
        let is_selected = i == selected;
        let label_style = if is_selected {
            theme::gold().add_modifier(Modifier::BOLD)
        } else {
            theme::bold()
        };
        lines.push(Line::from(vec![
            Span::styled(if is_selected { "  ▸ " } else { "    " }, theme::emerald()),
            Span::styled(format!("{:<10}", name.display_name()), label_style),
            Span::styled(format!("{:+} min", minutes), value_style),
        ]));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [← →] adjust  ·  [r] reset all  ·  [Esc] close",
        theme::dim(),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(modal_block(" Prayer Adjustments ")),
        area,
    );
}

fn audio_modal(frame: &mut Frame, settings: &SettingsState, selected: usize) {
    let area = popup_area(frame, ADHAN_VOICES.len() as u16 + 9);
    frame.render_widget(Clear, area);

    let slider = |label: &str, value: u8, row: usize| -> Line<'static> {
        let is_selected = row == selected;
        let label_style = if is_selected {
            theme::gold().add_modifier(Modifier::BOLD)
        } else {
            theme::bold()
        };
        Line::from(vec![
            Span::styled(if is_selected { "  ▸ " } else { "    " }, theme::emerald()),
            Span::styled(format!("{:<20}", label), label_style),
            Span::styled(progress_bar(u32::from(value), 100, 12), theme::emerald()),
            Span::styled(format!(" {}%", value), theme::amber()),
        ])
    };

    let mut lines = vec![
        Line::from(""),
        slider("Adhan Volume", settings.adhan_volume, 0),
        slider("Notification Volume", settings.notification_volume, 1),
        Line::from(""),
        Line::from(Span::styled("    Adhan Voice", theme::gold())),
    ];
    for (i, voice) in ADHAN_VOICES.iter().enumerate() {
        lines.push(option_line(voice, i == settings.adhan_voice, i + 2 == selected));
    }
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "  [← →] volume  ·  [Enter] voice  ·  [Esc] close",
        theme::dim(),
    )));

    frame.render_widget(
        Paragraph::new(lines).block(modal_block(" Audio Settings ")),
        area,
    );
}

fn about_modal(frame: &mut Frame) {
    let area = popup_area(frame, 12);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "  mihrab",
            theme::gold().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            format!("  Version {}", env!("CARGO_PKG_VERSION")),
            theme::dim(),
        )),
        Line::from(""),
        Line::from(Span::styled("  • Daily prayer times", theme::dim())),
        Line::from(Span::styled("  • Qibla compass", theme::dim())),
        Line::from(Span::styled("  • Islamic calendar", theme::dim())),
        Line::from(Span::styled("  • Digital tasbih", theme::dim())),
        Line::from(Span::styled("  • Dua library", theme::dim())),
        Line::from(""),
        Line::from(Span::styled("  [any key] close", theme::dim())),
    ];

    frame.render_widget(Paragraph::new(lines).block(modal_block(" About ")), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_track_saved_locations() {
        let mut settings = SettingsState::new();
        let base = settings_rows(&settings);
        assert_eq!(base[0], SettingsRow::Language);
        assert!(base.contains(&SettingsRow::SavedLocation(1)));
        assert!(!base.contains(&SettingsRow::SavedLocation(2)));

        settings.add_location("Cairo, Egypt");
        let grown = settings_rows(&settings);
        assert_eq!(grown.len(), base.len() + 1);
        assert!(grown.contains(&SettingsRow::SavedLocation(2)));

        settings.delete_location(1);
        settings.delete_location(2);
        settings.delete_location(3);
        let emptied = settings_rows(&settings);
        assert!(!emptied.iter().any(|r| matches!(r, SettingsRow::SavedLocation(_))));
        assert_eq!(*emptied.last().unwrap(), SettingsRow::About);
    }
}

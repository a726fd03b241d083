use anyhow::Result;
use chrono::{Local, NaiveDateTime};
use crossterm::event::{KeyCode, KeyEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph},
    Frame,
};

use crate::config::AppConfig;
use crate::models::settings::{
    ACCENT_COLORS, ADHAN_VOICES, ASR_METHODS, CALCULATION_METHODS, HIGH_LATITUDE_RULES, LANGUAGES,
    THEMES,
};
use crate::models::{DuaCategory, DuaLibrary, SettingsState, TasbihCounter};
use crate::prayer_times::{NextPrayerInfo, PrayerSchedule};
use crate::tui::events::{Event, EventHandler};
use crate::tui::theme;
use crate::tui::widgets::settings::{settings_rows, SettingsRow};
use crate::tui::widgets::{
    dua, header, next_prayer, placeholder, prayers, qibla, settings, statusbar, tabs, tasbih,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Qibla,
    Quran,
    Ramadan,
    More,
    Tasbih,
    Dua,
}

impl Tab {
    pub fn label(&self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Qibla => "Qibla",
            Tab::Quran => "Quran",
            Tab::Ramadan => "Ramadan",
            Tab::More => "More",
            Tab::Tasbih => "Tasbih",
            Tab::Dua => "Dua",
        }
    }
}

/// At most one modal is open at a time; all but Help belong to the
/// settings surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Modal {
    Language,
    Theme,
    Accent,
    Calculation,
    Asr,
    HighLatitude,
    Adjustments,
    Audio,
    About,
    Help,
}

#[derive(Debug, Clone, PartialEq)]
pub enum InputMode {
    Normal,
    DuaSearch,
    LocationInput,
}

pub struct App {
    pub config: AppConfig,
    pub schedule: PrayerSchedule,
    pub tab: Tab,
    pub modal: Option<Modal>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub should_quit: bool,

    // Refreshed on every tick; draw never reads the clock itself.
    pub now: NaiveDateTime,
    pub info: NextPrayerInfo,

    pub date_offset: i64,
    pub tasbih: TasbihCounter,
    pub duas: DuaLibrary,
    pub dua_query: String,
    pub dua_category: usize, // 0 = All, 1..=6 index into DuaCategory::all()
    pub dua_selected: usize,
    pub dua_expanded: bool,
    pub settings: SettingsState,
    pub settings_selected: usize,
    pub modal_selected: usize,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, schedule: PrayerSchedule) -> Self {
        let now = Local::now().naive_local();
        let info = schedule.next_prayer_info(now);

        App {
            config,
            schedule,
            tab: Tab::Home,
            modal: None,
            input_mode: InputMode::Normal,
            input_buffer: String::new(),
            should_quit: false,
            now,
            info,
            date_offset: 0,
            tasbih: TasbihCounter::new(),
            duas: DuaLibrary::new(),
            dua_query: String::new(),
            dua_category: 0,
            dua_selected: 0,
            dua_expanded: false,
            settings: SettingsState::new(),
            settings_selected: 0,
            modal_selected: 0,
            status_message: None,
        }
    }

    pub fn tick(&mut self) {
        self.now = Local::now().naive_local();
        self.info = self.schedule.next_prayer_info(self.now);
        self.tasbih.on_tick();
    }

    fn active_category(&self) -> Option<DuaCategory> {
        match self.dua_category {
            0 => None,
            i => Some(DuaCategory::all()[i - 1]),
        }
    }

    fn filtered_dua_len(&self) -> usize {
        self.duas
            .filtered(&self.dua_query, self.active_category())
            .len()
    }

    pub fn handle_key(&mut self, key: crossterm::event::KeyEvent) {
        // Only handle actual key presses — ignore release/repeat events from some terminals
        if key.kind != KeyEventKind::Press {
            return;
        }
        self.status_message = None;
        match self.input_mode {
            InputMode::DuaSearch => self.handle_dua_search_key(key),
            InputMode::LocationInput => self.handle_location_input_key(key),
            InputMode::Normal => match self.modal {
                Some(modal) => self.handle_modal_key(modal, key),
                None => self.handle_normal_key(key),
            },
        }
    }

    fn handle_normal_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            // Esc backs out one layer: feature tab → Home → quit.
            KeyCode::Esc => {
                if self.tab != Tab::Home {
                    self.switch_tab(Tab::Home);
                } else {
                    self.should_quit = true;
                }
                return;
            }
            KeyCode::Char('?') => {
                self.modal = Some(Modal::Help);
                return;
            }
            KeyCode::Char('1') => return self.switch_tab(Tab::Home),
            KeyCode::Char('2') => return self.switch_tab(Tab::Qibla),
            KeyCode::Char('3') => return self.switch_tab(Tab::Quran),
            KeyCode::Char('4') => return self.switch_tab(Tab::Ramadan),
            KeyCode::Char('5') => return self.switch_tab(Tab::More),
            KeyCode::Char('6') => return self.switch_tab(Tab::Tasbih),
            KeyCode::Char('7') => return self.switch_tab(Tab::Dua),
            _ => {}
        }

        match self.tab {
            Tab::Home | Tab::Qibla | Tab::Quran | Tab::Ramadan => self.handle_date_key(key),
            Tab::Tasbih => self.handle_tasbih_key(key),
            Tab::Dua => self.handle_dua_key(key),
            Tab::More => self.handle_settings_key(key),
        }
    }

    fn switch_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.dua_expanded = false;
        self.settings_selected = 0;
    }

    fn handle_date_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Left | KeyCode::Char('p') => self.date_offset -= 1,
            KeyCode::Right | KeyCode::Char('n') => self.date_offset += 1,
            KeyCode::Char('t') => self.date_offset = 0,
            _ => {}
        }
    }

    fn handle_tasbih_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Char(' ') | KeyCode::Enter => self.tasbih.increment(),
            KeyCode::Char('r') => self.tasbih.reset(),
            KeyCode::Char('R') => self.tasbih.reset_all(),
            KeyCode::Char(']') => self.tasbih.next_target(),
            KeyCode::Char('[') => self.tasbih.prev_target(),
            _ => self.handle_date_key(key),
        }
    }

    fn handle_dua_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Char('/') => {
                self.input_mode = InputMode::DuaSearch;
            }
            KeyCode::Char('c') => {
                // All + the six categories
                self.dua_category = (self.dua_category + 1) % (DuaCategory::all().len() + 1);
                self.dua_selected = 0;
                self.dua_expanded = false;
            }
            KeyCode::Up => {
                self.dua_selected = self.dua_selected.saturating_sub(1);
                self.dua_expanded = false;
            }
            KeyCode::Down => {
                let max = self.filtered_dua_len().saturating_sub(1);
                if self.dua_selected < max {
                    self.dua_selected += 1;
                }
                self.dua_expanded = false;
            }
            KeyCode::Enter => {
                if self.filtered_dua_len() > 0 {
                    self.dua_expanded = !self.dua_expanded;
                }
            }
            KeyCode::Char('f') => {
                let id = self
                    .duas
                    .filtered(&self.dua_query, self.active_category())
                    .get(self.dua_selected)
                    .map(|d| d.id);
                if let Some(id) = id {
                    self.duas.toggle_favorite(id);
                }
            }
            _ => {}
        }
    }

    fn handle_dua_search_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => {
                self.input_mode = InputMode::Normal;
            }
            KeyCode::Backspace => {
                self.dua_query.pop();
                self.dua_selected = 0;
            }
            KeyCode::Char(c) => {
                self.dua_query.push(c);
                self.dua_selected = 0;
            }
            _ => {}
        }
    }

    fn handle_settings_key(&mut self, key: crossterm::event::KeyEvent) {
        let rows = settings_rows(&self.settings);
        match key.code {
            KeyCode::Up => {
                self.settings_selected = self.settings_selected.saturating_sub(1);
            }
            KeyCode::Down => {
                if self.settings_selected + 1 < rows.len() {
                    self.settings_selected += 1;
                }
            }
            KeyCode::Enter => self.activate_settings_row(),
            _ => {}
        }
    }

    fn activate_settings_row(&mut self) {
        let rows = settings_rows(&self.settings);
        let Some(row) = rows.get(self.settings_selected).copied() else {
            return;
        };
        match row {
            SettingsRow::Language => self.open_modal(Modal::Language, self.settings.language),
            SettingsRow::Theme => self.open_modal(Modal::Theme, self.settings.theme),
            SettingsRow::Accent => self.open_modal(Modal::Accent, self.settings.accent_color),
            SettingsRow::Notifications => self.settings.toggle_notifications(),
            SettingsRow::CurrentLocation => {
                self.status_message =
                    Some("Location sensing is not available in the terminal".to_string());
            }
            SettingsRow::AddLocation => {
                self.input_mode = InputMode::LocationInput;
                self.input_buffer.clear();
            }
            SettingsRow::SavedLocation(i) => {
                if let Some(loc) = self.settings.saved_locations.get(i) {
                    let id = loc.id;
                    self.settings.delete_location(id);
                    let remaining = settings_rows(&self.settings).len();
                    self.settings_selected = self.settings_selected.min(remaining - 1);
                }
            }
            SettingsRow::Calculation => {
                self.open_modal(Modal::Calculation, self.settings.calculation_method)
            }
            SettingsRow::Asr => self.open_modal(Modal::Asr, self.settings.asr_method),
            SettingsRow::HighLatitude => {
                self.open_modal(Modal::HighLatitude, self.settings.high_latitude)
            }
            SettingsRow::Adjustments => self.open_modal(Modal::Adjustments, 0),
            SettingsRow::Audio => self.open_modal(Modal::Audio, 0),
            SettingsRow::About => self.open_modal(Modal::About, 0),
        }
    }

    fn open_modal(&mut self, modal: Modal, selected: usize) {
        self.modal = Some(modal);
        self.modal_selected = selected;
    }

    fn handle_location_input_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Enter => {
                let name = self.input_buffer.clone();
                self.settings.add_location(&name);
                self.input_mode = InputMode::Normal;
                self.input_buffer.clear();
            }
            KeyCode::Backspace => {
                self.input_buffer.pop();
            }
            KeyCode::Char(c) => {
                self.input_buffer.push(c);
            }
            _ => {}
        }
    }

    fn handle_modal_key(&mut self, modal: Modal, key: crossterm::event::KeyEvent) {
        match modal {
            // Any key dismisses these.
            Modal::Help | Modal::About => {
                self.modal = None;
            }
            Modal::Language => {
                if let Some(i) = self.choice_modal_key(key, LANGUAGES.len()) {
                    self.settings.language = i;
                }
            }
            Modal::Theme => {
                if let Some(i) = self.choice_modal_key(key, THEMES.len()) {
                    self.settings.theme = i;
                }
            }
            Modal::Accent => {
                if let Some(i) = self.choice_modal_key(key, ACCENT_COLORS.len()) {
                    self.settings.accent_color = i;
                }
            }
            Modal::Calculation => {
                if let Some(i) = self.choice_modal_key(key, CALCULATION_METHODS.len()) {
                    self.settings.calculation_method = i;
                }
            }
            Modal::Asr => {
                if let Some(i) = self.choice_modal_key(key, ASR_METHODS.len()) {
                    self.settings.asr_method = i;
                }
            }
            Modal::HighLatitude => {
                if let Some(i) = self.choice_modal_key(key, HIGH_LATITUDE_RULES.len()) {
                    self.settings.high_latitude = i;
                }
            }
            Modal::Adjustments => self.handle_adjustments_key(key),
            Modal::Audio => self.handle_audio_key(key),
        }
    }

    /// Shared Up/Down/Enter/Esc handling for the selection modals.
    /// Returns the chosen index on Enter.
    fn choice_modal_key(&mut self, key: crossterm::event::KeyEvent, len: usize) -> Option<usize> {
        match key.code {
            KeyCode::Esc => {
                self.modal = None;
                None
            }
            KeyCode::Up => {
                self.modal_selected = self.modal_selected.saturating_sub(1);
                None
            }
            KeyCode::Down => {
                if self.modal_selected + 1 < len {
                    self.modal_selected += 1;
                }
                None
            }
            KeyCode::Enter => {
                self.modal = None;
                Some(self.modal_selected)
            }
            _ => None,
        }
    }

    fn handle_adjustments_key(&mut self, key: crossterm::event::KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Enter => self.modal = None,
            KeyCode::Up => self.modal_selected = self.modal_selected.saturating_sub(1),
            KeyCode::Down => {
                if self.modal_selected + 1 < self.settings.adjustments.len() {
                    self.modal_selected += 1;
                }
            }
            KeyCode::Left => self.settings.adjust_prayer(self.modal_selected, -1),
            KeyCode::Right => self.settings.adjust_prayer(self.modal_selected, 1),
            KeyCode::Char('r') => self.settings.reset_adjustments(),
            _ => {}
        }
    }

    fn handle_audio_key(&mut self, key: crossterm::event::KeyEvent) {
        // Rows 0 and 1 are the volume sliders, the rest the adhan voices.
        let rows = 2 + ADHAN_VOICES.len();
        match key.code {
            KeyCode::Esc => self.modal = None,
            KeyCode::Up => self.modal_selected = self.modal_selected.saturating_sub(1),
            KeyCode::Down => {
                if self.modal_selected + 1 < rows {
                    self.modal_selected += 1;
                }
            }
            KeyCode::Left => match self.modal_selected {
                0 => self.settings.adjust_adhan_volume(-5),
                1 => self.settings.adjust_notification_volume(-5),
                _ => {}
            },
            KeyCode::Right => match self.modal_selected {
                0 => self.settings.adjust_adhan_volume(5),
                1 => self.settings.adjust_notification_volume(5),
                _ => {}
            },
            KeyCode::Enter => {
                if self.modal_selected >= 2 {
                    self.settings.adhan_voice = self.modal_selected - 2;
                    self.modal = None;
                }
            }
            _ => {}
        }
    }

    pub fn draw(&self, frame: &mut Frame) {
        let area = frame.area();
        frame.render_widget(Block::default().style(theme::base()), area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(8), // header
                Constraint::Min(0),    // body
                Constraint::Length(1), // tab bar
                Constraint::Length(1), // status bar
            ])
            .split(area);

        header::render(
            frame,
            chunks[0],
            &self.config.display.location,
            self.now.date(),
            self.date_offset,
        );

        self.draw_body(frame, chunks[1]);
        tabs::render(frame, chunks[2], self.tab);
        statusbar::render(
            frame,
            chunks[3],
            self.tab,
            &self.input_mode,
            self.status_message.as_deref(),
        );

        if let Some(modal) = self.modal {
            match modal {
                Modal::Help => self.draw_help_overlay(frame),
                _ => settings::draw_modal(frame, modal, &self.settings, self.modal_selected),
            }
        }

        if self.input_mode == InputMode::LocationInput {
            self.draw_location_input(frame);
        }
    }

    fn draw_body(&self, frame: &mut Frame, body: Rect) {
        match self.tab {
            Tab::Home => {
                let chunks = Layout::default()
                    .direction(Direction::Vertical)
                    .constraints([
                        Constraint::Length(10), // next prayer card
                        Constraint::Length(8),  // prayer list
                        Constraint::Min(0),     // feature grid
                    ])
                    .split(body);

                next_prayer::render(frame, chunks[0], &self.schedule, &self.info, self.now.time());
                prayers::render(frame, chunks[1], &self.schedule, &self.info);
                self.draw_feature_grid(frame, chunks[2]);
            }
            Tab::Qibla => qibla::render(frame, body, self.config.qibla_bearing()),
            Tab::Quran => placeholder::render(frame, body, "Quran", "Coming soon..."),
            Tab::Ramadan => placeholder::render(frame, body, "Ramadan", "Coming soon..."),
            Tab::More => settings::render(frame, body, &self.settings, self.settings_selected),
            Tab::Tasbih => tasbih::render(frame, body, &self.tasbih),
            Tab::Dua => dua::render(
                frame,
                body,
                &self.duas,
                &self.dua_query,
                self.active_category(),
                self.dua_selected,
                self.dua_expanded,
                self.input_mode == InputMode::DuaSearch,
            ),
        }
    }

    fn draw_feature_grid(&self, frame: &mut Frame, area: Rect) {
        let block = Block::default()
            .title(Span::styled(" Features ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(ratatui::style::Style::default().fg(theme::BORDER))
            .style(theme::surface());

        let lines = vec![
            Line::from(vec![
                Span::styled("  [3] ", theme::gold()),
                Span::styled(format!("{:<12}", "Quran"), theme::emerald()),
                Span::styled("[6] ", theme::gold()),
                Span::styled("Tasbih", theme::amber()),
            ]),
            Line::from(vec![
                Span::styled("  [4] ", theme::gold()),
                Span::styled(format!("{:<12}", "Ramadan"), theme::amber()),
                Span::styled("[7] ", theme::gold()),
                Span::styled("Dua", theme::rose()),
            ]),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }

    fn draw_help_overlay(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 6,
            width: area.width / 2,
            height: (area.height * 2 / 3).min(16),
        };

        frame.render_widget(Clear, popup_area);

        let help_text = vec![
            Line::from(Span::styled(
                "  Keybindings",
                theme::gold().add_modifier(Modifier::BOLD),
            )),
            Line::from(""),
            Line::from(vec![
                Span::styled("  [1-7]        ", theme::gold()),
                Span::styled("Switch tab", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [← →] / p n  ", theme::gold()),
                Span::styled("Browse dates", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [t]          ", theme::gold()),
                Span::styled("Back to today", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Space]      ", theme::gold()),
                Span::styled("Count tasbih", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [/]          ", theme::gold()),
                Span::styled("Search duas", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [c]          ", theme::gold()),
                Span::styled("Cycle dua category", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [f]          ", theme::gold()),
                Span::styled("Favorite dua", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [?]          ", theme::gold()),
                Span::styled("Toggle help", theme::dim()),
            ]),
            Line::from(vec![
                Span::styled("  [Esc]        ", theme::gold()),
                Span::styled("Back / quit", theme::dim()),
            ]),
        ];

        let block = Block::default()
            .title(Span::styled(" Help ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::gold())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(help_text).block(block), popup_area);
    }

    fn draw_location_input(&self, frame: &mut Frame) {
        let area = frame.area();

        let popup_area = Rect {
            x: area.width / 4,
            y: area.height / 2 - 3,
            width: area.width / 2,
            height: 5,
        };

        frame.render_widget(Clear, popup_area);

        let text = vec![
            Line::from(""),
            Line::from(vec![
                Span::styled("  Location name: ", theme::dim()),
                Span::styled(
                    self.input_buffer.as_str(),
                    theme::gold().add_modifier(Modifier::BOLD),
                ),
                Span::styled("█", theme::amber()), // block cursor
            ]),
            Line::from(Span::styled(
                "  [Enter] save  ·  [Esc] cancel",
                theme::dim(),
            )),
        ];

        let block = Block::default()
            .title(Span::styled(" Add Location ", theme::gold()))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(theme::amber())
            .style(theme::surface());

        frame.render_widget(Paragraph::new(text).block(block), popup_area);
    }
}

/// Run the TUI event loop.
pub fn run(config: AppConfig, schedule: PrayerSchedule) -> Result<()> {
    let mut app = App::new(config, schedule);

    let mut terminal = ratatui::init();
    let events = EventHandler::new(1000);

    loop {
        terminal.draw(|frame| app.draw(frame))?;

        match events.next()? {
            Event::Key(key) => {
                app.handle_key(key);
                if app.should_quit {
                    break;
                }
            }
            Event::Tick => {
                app.tick();
            }
        }
    }

    ratatui::restore();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn test_app() -> App {
        let config = AppConfig::default();
        let schedule = config.schedule().unwrap();
        App::new(config, schedule)
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn number_keys_switch_tabs() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('2'));
        assert_eq!(app.tab, Tab::Qibla);
        press(&mut app, KeyCode::Char('6'));
        assert_eq!(app.tab, Tab::Tasbih);
        press(&mut app, KeyCode::Char('1'));
        assert_eq!(app.tab, Tab::Home);
    }

    #[test]
    fn escape_backs_out_tab_then_quits() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.tab, Tab::Dua);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tab, Tab::Home);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn date_navigation_steps_by_one_and_resets() {
        let mut app = test_app();
        press(&mut app, KeyCode::Left);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.date_offset, -2);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.date_offset, -1);
        press(&mut app, KeyCode::Char('t'));
        assert_eq!(app.date_offset, 0);
    }

    #[test]
    fn help_modal_opens_and_any_key_closes() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('?'));
        assert_eq!(app.modal, Some(Modal::Help));
        press(&mut app, KeyCode::Char('x'));
        assert_eq!(app.modal, None);
    }

    #[test]
    fn language_modal_applies_selection() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('5'));
        // First row is the language selector.
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, Some(Modal::Language));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.modal, None);
        assert_eq!(app.settings.language, 1);
    }

    #[test]
    fn escape_closes_modal_before_leaving_tab() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('5'));
        press(&mut app, KeyCode::Enter);
        assert!(app.modal.is_some());
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.modal, None);
        assert_eq!(app.tab, Tab::More);
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.tab, Tab::Home);
    }

    #[test]
    fn tasbih_keys_drive_the_counter() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('6'));
        press(&mut app, KeyCode::Char(' '));
        press(&mut app, KeyCode::Char(' '));
        assert_eq!(app.tasbih.count, 2);
        press(&mut app, KeyCode::Char(']'));
        assert_eq!(app.tasbih.target, 99);
        press(&mut app, KeyCode::Char('r'));
        assert_eq!(app.tasbih.count, 0);
        assert_eq!(app.tasbih.total, 2);
    }

    #[test]
    fn dua_search_input_filters_live() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('7'));
        press(&mut app, KeyCode::Char('/'));
        assert_eq!(app.input_mode, InputMode::DuaSearch);
        for c in "refuge".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        assert_eq!(app.filtered_dua_len(), 1);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert_eq!(app.dua_query, "refuge");
    }

    #[test]
    fn dua_category_cycles_through_all_and_back() {
        let mut app = test_app();
        press(&mut app, KeyCode::Char('7'));
        assert_eq!(app.active_category(), None);
        press(&mut app, KeyCode::Char('c'));
        assert_eq!(app.active_category(), Some(DuaCategory::MorningEvening));
        for _ in 0..6 {
            press(&mut app, KeyCode::Char('c'));
        }
        assert_eq!(app.active_category(), None);
    }

    #[test]
    fn location_input_adds_on_enter() {
        let mut app = test_app();
        app.input_mode = InputMode::LocationInput;
        for c in "Cairo".chars() {
            press(&mut app, KeyCode::Char(c));
        }
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.input_mode, InputMode::Normal);
        assert!(
            app.settings
                .saved_locations
                .iter()
                .any(|l| l.name == "Cairo")
        );
    }

    #[test]
    fn adjustments_modal_nudges_without_touching_schedule() {
        let mut app = test_app();
        let before = app.schedule.clone();
        app.open_modal(Modal::Adjustments, 0);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Right);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.settings.adjustments[0], 2);
        assert_eq!(app.settings.adjustments[1], -1);
        // Display-only: the engine's schedule is untouched.
        assert_eq!(app.schedule, before);
    }

    #[test]
    fn tick_refreshes_countdown_and_settles_tasbih() {
        let mut app = test_app();
        for _ in 0..app.tasbih.target {
            app.tasbih.increment();
        }
        assert_eq!(app.tasbih.cycles, 1);
        app.tick();
        assert_eq!(app.tasbih.count, 0);
        assert_eq!(app.info, app.schedule.next_prayer_info(app.now));
    }
}

use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::app::{InputMode, Tab};
use crate::tui::theme;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    tab: Tab,
    input_mode: &InputMode,
    status_message: Option<&str>,
) {
    if let Some(message) = status_message {
        let line = Line::from(Span::styled(message, theme::amber()));
        frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
        return;
    }

    let hints: &[(&str, &str)] = match input_mode {
        InputMode::DuaSearch => &[("type", " to search  "), ("[Enter]/[Esc]", " done")],
        InputMode::LocationInput => &[("type", " a name  "), ("[Enter]", " save  "), ("[Esc]", " cancel")],
        InputMode::Normal => match tab {
            Tab::Home | Tab::Qibla | Tab::Quran | Tab::Ramadan => &[
                ("[1-7]", " tabs  "),
                ("[← →]", " date  "),
                ("[t]", " today  "),
                ("[?]", " help  "),
                ("[Esc]", " back"),
            ],
            Tab::Tasbih => &[
                ("[Space]", " count  "),
                ("[r]", " reset  "),
                ("[R]", " reset all  "),
                ("[[ ]]", " target  "),
                ("[Esc]", " back"),
            ],
            Tab::Dua => &[
                ("[/]", " search  "),
                ("[c]", " category  "),
                ("[↑ ↓]", " select  "),
                ("[Enter]", " expand  "),
                ("[f]", " favorite  "),
                ("[Esc]", " back"),
            ],
            Tab::More => &[
                ("[↑ ↓]", " select  "),
                ("[Enter]", " open / toggle  "),
                ("[Esc]", " back"),
            ],
        },
    };

    let mut spans = Vec::new();
    for (key, label) in hints {
        spans.push(Span::styled(*key, theme::gold()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let line = Line::from(spans);
    let paragraph = Paragraph::new(line).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

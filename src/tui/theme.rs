use ratatui::style::{Color, Modifier, Style};

pub const BG: Color = Color::Rgb(10, 31, 26);
pub const SURFACE: Color = Color::Rgb(13, 40, 24);
pub const BORDER: Color = Color::Rgb(6, 78, 59);
pub const TEXT: Color = Color::Rgb(209, 250, 229);
pub const TEXT_DIM: Color = Color::Rgb(110, 144, 128);
pub const EMERALD: Color = Color::Rgb(110, 231, 183);
pub const AMBER: Color = Color::Rgb(252, 211, 77);
pub const GOLD: Color = Color::Rgb(251, 191, 36);
pub const ROSE: Color = Color::Rgb(251, 113, 133);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn emerald() -> Style {
    Style::default().fg(EMERALD)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn rose() -> Style {
    Style::default().fg(ROSE)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

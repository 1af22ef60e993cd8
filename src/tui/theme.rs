use ratatui::style::{Color, Modifier, Style};

use crate::models::Intensity;

pub const BG: Color = Color::Rgb(10, 24, 20);
pub const SURFACE: Color = Color::Rgb(16, 36, 30);
pub const BORDER: Color = Color::Rgb(36, 72, 60);
pub const TEXT: Color = Color::Rgb(226, 236, 230);
pub const TEXT_DIM: Color = Color::Rgb(120, 150, 138);
pub const EMERALD: Color = Color::Rgb(16, 185, 129);
pub const GOLD: Color = Color::Rgb(212, 175, 55);
pub const AMBER: Color = Color::Rgb(210, 138, 60);
pub const RED: Color = Color::Rgb(180, 82, 62);

pub fn base() -> Style {
    Style::default().fg(TEXT).bg(BG)
}

pub fn dim() -> Style {
    Style::default().fg(TEXT_DIM)
}

pub fn emerald() -> Style {
    Style::default().fg(EMERALD)
}

pub fn gold() -> Style {
    Style::default().fg(GOLD)
}

pub fn amber() -> Style {
    Style::default().fg(AMBER)
}

pub fn red() -> Style {
    Style::default().fg(RED)
}

pub fn bold() -> Style {
    Style::default().fg(TEXT).add_modifier(Modifier::BOLD)
}

pub fn surface() -> Style {
    Style::default().fg(TEXT).bg(SURFACE)
}

pub fn border(focused: bool) -> Style {
    if focused {
        gold()
    } else {
        Style::default().fg(BORDER)
    }
}

/// Heatmap cell colour, from faint to full emerald.
pub fn intensity(level: Intensity) -> Style {
    match level {
        Intensity::None => Style::default().fg(BORDER),
        Intensity::Low => Style::default().fg(Color::Rgb(40, 110, 86)),
        Intensity::Medium => Style::default().fg(Color::Rgb(24, 150, 108)),
        Intensity::High => emerald(),
        Intensity::Full => emerald().add_modifier(Modifier::BOLD),
    }
}

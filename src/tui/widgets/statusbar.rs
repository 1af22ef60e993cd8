use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect) {
    let hints = [
        ("[Enter]", " centang  "),
        ("[f]", " puasa  "),
        ("[j]", " refleksi  "),
        ("[t]", " tasbih  "),
        ("[p]", " bagikan  "),
        ("[?]", " bantuan  "),
        ("[Esc]", " keluar"),
    ];

    let mut spans = Vec::new();
    for (key, label) in &hints {
        spans.push(Span::styled(*key, theme::gold()));
        spans.push(Span::styled(*label, theme::dim()));
    }

    let paragraph = Paragraph::new(Line::from(spans)).alignment(Alignment::Center);
    frame.render_widget(paragraph, area);
}

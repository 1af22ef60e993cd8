use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Wrap},
    Frame,
};

use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, entry: &str) {
    let block = Block::default()
        .title(Span::styled(" Refleksi Harian ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let line = if entry.is_empty() {
        Line::from(Span::styled(
            "  Apa yang kamu syukuri hari ini?  [j] tulis",
            theme::dim(),
        ))
    } else {
        Line::from(Span::styled(format!("  {}", entry), theme::bold()))
    };

    let paragraph = Paragraph::new(line)
        .block(block)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

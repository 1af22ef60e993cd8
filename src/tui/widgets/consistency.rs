use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{ConsistencyDay, Intensity};
use crate::tracker::active_days;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, window: &[ConsistencyDay]) {
    let block = Block::default()
        .title(Span::styled(" Konsistensi ", theme::gold()))
        .title_bottom(Span::styled(
            format!(" {}/{} hari aktif ", active_days(window), window.len()),
            theme::dim(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let mut lines = Vec::new();
    for row in window.chunks(10) {
        let mut spans = vec![Span::raw("  ")];
        for day in row {
            spans.push(Span::styled("■ ", theme::intensity(day.intensity)));
        }
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let mut legend = vec![Span::styled("  Kurang ", theme::dim())];
    for level in [
        Intensity::None,
        Intensity::Low,
        Intensity::Medium,
        Intensity::High,
        Intensity::Full,
    ] {
        legend.push(Span::styled("■", theme::intensity(level)));
    }
    legend.push(Span::styled(" Lebih", theme::dim()));
    lines.push(Line::from(legend));

    frame.render_widget(Paragraph::new(lines).block(block), area);
}

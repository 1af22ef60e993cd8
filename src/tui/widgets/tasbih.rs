use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Gauge, Paragraph},
    Frame,
};
use tui_big_text::{BigText, PixelSize};

use crate::models::TasbihState;
use crate::tui::theme;

pub fn render(frame: &mut Frame, area: Rect, state: &TasbihState) {
    let dhikr = state.dhikr();
    let target = if state.is_unlimited() {
        "∞".to_string()
    } else {
        state.target.to_string()
    };

    let block = Block::default()
        .title(Span::styled(" Tasbih Digital ", theme::gold()))
        .title_bottom(Span::styled(
            " [Space] hitung  [r] reset  [←/→] dzikir  [g] target  [Esc] kembali ",
            theme::dim(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald())
        .style(theme::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // dhikr
            Constraint::Length(5), // count
            Constraint::Length(1), // target
            Constraint::Length(1),
            Constraint::Length(1), // gauge
            Constraint::Min(0),
        ])
        .split(inner);

    let mut heading = vec![
        Line::from(Span::styled(
            dhikr.name,
            theme::emerald().add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(state.recitation().to_string(), theme::gold())),
    ];
    if !dhikr.meaning.is_empty() {
        heading.push(Line::from(Span::styled(
            format!("\"{}\"", dhikr.meaning),
            theme::dim(),
        )));
    }
    frame.render_widget(
        Paragraph::new(heading).alignment(Alignment::Center),
        chunks[0],
    );

    // Quadrant glyphs are four cells wide
    let digits = state.count.to_string();
    let width = (digits.len() as u16 * 4).min(chunks[1].width);
    let count_area = Rect {
        x: chunks[1].x + (chunks[1].width - width) / 2,
        width,
        ..chunks[1]
    };
    let count = BigText::builder()
        .pixel_size(PixelSize::Quadrant)
        .style(theme::bold())
        .lines(vec![Line::from(digits)])
        .build();
    frame.render_widget(count, count_area);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            format!("Target {}", target),
            theme::dim(),
        )))
        .alignment(Alignment::Center),
        chunks[2],
    );

    let gauge = Gauge::default()
        .gauge_style(theme::emerald())
        .percent(state.progress_percent() as u16)
        .label(format!("{}%", state.progress_percent()));
    frame.render_widget(gauge, chunks[4]);
}

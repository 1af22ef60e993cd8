use chrono::NaiveDate;
use ratatui::{
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::tui::theme;
use crate::utils::format::format_date_id;

pub fn render(
    frame: &mut Frame,
    area: Rect,
    today: NaiveDate,
    hijri: Option<&str>,
    ramadan_day: Option<usize>,
) {
    let mut title = vec![
        Span::styled("  عمل  ", theme::gold().add_modifier(Modifier::BOLD)),
        Span::styled("amal", theme::emerald().add_modifier(Modifier::BOLD)),
    ];
    if let Some(day) = ramadan_day {
        title.push(Span::styled("  ·  ", theme::dim()));
        title.push(Span::styled(format!("Ramadan hari ke-{}", day), theme::gold()));
    }

    let mut date_spans = Vec::new();
    if let Some(hijri) = hijri {
        date_spans.push(Span::styled(hijri.to_string(), theme::amber()));
        date_spans.push(Span::styled("  ·  ", theme::dim()));
    }
    date_spans.push(Span::styled(format_date_id(today), theme::dim()));

    let text = vec![Line::from(title), Line::from(""), Line::from(date_spans)];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::emerald().add_modifier(Modifier::BOLD))
        .style(theme::base());

    let paragraph = Paragraph::new(text)
        .block(block)
        .alignment(Alignment::Center);

    frame.render_widget(paragraph, area);
}

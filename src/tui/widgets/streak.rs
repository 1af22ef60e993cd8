use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::models::{StreakResult, badge_for, next_badge};
use crate::tui::theme;
use crate::utils::format::progress_bar;

pub fn render(frame: &mut Frame, area: Rect, streaks: &StreakResult) {
    let block = Block::default()
        .title(Span::styled(" Streak ", theme::gold()))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(false))
        .style(theme::surface());

    let badge = badge_for(streaks.fasting);

    // Bar fills towards the next tier; full once the top tier is reached
    let (bar, hint) = match next_badge(streaks.fasting) {
        Some(next) => (
            progress_bar(streaks.fasting, next.threshold, 12),
            format!("  {} hari lagi → {}", next.threshold - streaks.fasting, next.label),
        ),
        None => (progress_bar(1, 1, 12), "  Tier tertinggi tercapai".to_string()),
    };

    let text = vec![
        Line::from(vec![
            Span::styled(format!("  {}  ", badge.icon), theme::gold()),
            Span::styled(badge.label, theme::bold()),
        ]),
        Line::from(vec![
            Span::styled("  ", theme::dim()),
            Span::styled(bar, theme::emerald()),
            Span::styled(
                format!("  Puasa {} hari", streaks.fasting),
                theme::emerald().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(hint, theme::dim())),
        Line::from(""),
        Line::from(vec![
            Span::styled("  Shalat  ", theme::dim()),
            Span::styled(format!("{:<4}", streaks.prayer), theme::bold()),
            Span::styled("  Tarawih  ", theme::dim()),
            Span::styled(streaks.tarawih.to_string(), theme::bold()),
        ]),
    ];

    frame.render_widget(Paragraph::new(text).block(block), area);
}

use ratatui::{
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem},
    Frame,
};

use crate::models::{DailyRecord, FASTING_POINTS, TaskId};
use crate::tui::theme;

/// Row 0 is fasting; rows 1..=7 follow [`TaskId::all`].
pub const ROWS: usize = 8;

pub fn task_at(row: usize) -> Option<TaskId> {
    row.checked_sub(1).and_then(|i| TaskId::all().get(i).copied())
}

pub fn render(frame: &mut Frame, area: Rect, record: &DailyRecord, focused_row: usize) {
    let percent = record.completion_percent();
    let block = Block::default()
        .title(Span::styled(" Ibadah Harian ", theme::gold()))
        .title_bottom(Span::styled(
            format!(" {}% · {}/{} selesai ", percent, record.completed_tasks.len(), TaskId::all().len()),
            theme::emerald(),
        ))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(theme::border(true))
        .style(theme::surface());

    let items: Vec<ListItem> = (0..ROWS)
        .map(|row| {
            let (label, points, done) = match task_at(row) {
                Some(task) => (task.display_name(), task.points(), record.is_done(task)),
                None => ("Puasa", FASTING_POINTS, record.is_fasting),
            };

            let (icon, icon_style) = if done {
                ("●", theme::emerald())
            } else {
                ("○", theme::dim())
            };
            let name_style = if row == focused_row {
                theme::gold().add_modifier(Modifier::BOLD)
            } else if done {
                theme::dim().add_modifier(Modifier::CROSSED_OUT)
            } else {
                theme::bold()
            };

            ListItem::new(Line::from(vec![
                Span::styled(format!("  {} ", row), theme::dim()),
                Span::styled(icon, icon_style),
                Span::styled(format!("  {:<20}", label), name_style),
                Span::styled(format!("+{}", points), theme::amber()),
            ]))
        })
        .collect();

    frame.render_widget(List::new(items).block(block), area);
}

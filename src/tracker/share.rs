use chrono::NaiveDate;
use unicode_width::UnicodeWidthStr;

use crate::db::KvStore;
use crate::models::{DailyRecord, TaskId};
use crate::tracker::store::DailyTaskStore;
use crate::tracker::streaks::count_streak;
use crate::utils::format::format_date_id;

/// The share card only looks back this far.
pub const SHARE_STREAK_DAYS: u32 = 30;

/// Days ending at `date` with any task done or a fast kept.
pub fn activity_streak<S: KvStore>(
    store: &DailyTaskStore<S>,
    date: NaiveDate,
    current: Option<&DailyRecord>,
) -> u32 {
    count_streak(store, date, current, SHARE_STREAK_DAYS, DailyRecord::has_activity)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareCard {
    pub date: NaiveDate,
    pub hijri: Option<String>,
    pub is_fasting: bool,
    pub completed: usize,
    pub total: usize,
    pub streak: u32,
}

impl ShareCard {
    pub fn build<S: KvStore>(
        store: &DailyTaskStore<S>,
        date: NaiveDate,
        current: Option<&DailyRecord>,
    ) -> Self {
        let record = match current {
            Some(rec) if rec.date == date => rec.clone(),
            _ => store.get_record(date),
        };
        Self {
            date,
            hijri: None,
            is_fasting: record.is_fasting,
            completed: record.completed_tasks.len(),
            total: TaskId::all().len(),
            streak: activity_streak(store, date, Some(&record)),
        }
    }

    pub fn with_hijri(mut self, hijri: impl Into<String>) -> Self {
        self.hijri = Some(hijri.into());
        self
    }

    /// Message body for pasting into a chat.
    pub fn to_text(&self) -> String {
        let fasting = if self.is_fasting {
            "Selesai ✅"
        } else {
            "Tidak ❌"
        };
        format!(
            "Progress Ramadan saya tanggal {}!\n\n\
             🌙 Puasa: {}\n\
             📝 Aktivitas: {}/{} Selesai\n\
             🔥 Streak: {} Hari\n\n\
             Mari tingkatkan ibadah bersama di bulan yang suci ini! #RamadanTracker",
            format_date_id(self.date),
            fasting,
            self.completed,
            self.total,
            self.streak
        )
    }

    /// Boxed card for the terminal.
    pub fn render_card(&self) -> String {
        let mut lines = vec!["Ramadan Tracker".to_string()];
        if let Some(hijri) = &self.hijri {
            lines.push(hijri.clone());
        }
        lines.push(format_date_id(self.date));
        lines.push(String::new());
        lines.push(format!(
            "🌙 Puasa      {}",
            if self.is_fasting { "✅" } else { "❌" }
        ));
        lines.push(format!("📝 Aktivitas  {}/{}", self.completed, self.total));
        lines.push(format!("🔥 Streak     {} Hari", self.streak));

        let width = lines.iter().map(|l| l.width()).max().unwrap_or(0);
        let mut out = format!("╭{}╮\n", "─".repeat(width + 2));
        for line in &lines {
            let pad = width - line.width();
            out.push_str(&format!("│ {}{} │\n", line, " ".repeat(pad)));
        }
        out.push_str(&format!("╰{}╯", "─".repeat(width + 2)));
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::tracker::store::KeyLayout;
    use chrono::Duration;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
    }

    #[test]
    fn streak_counts_any_activity() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        store.toggle_task(day(), TaskId::Tadarus);
        store.set_fasting(day() - Duration::days(1), true);
        store.toggle_task(day() - Duration::days(3), TaskId::Subuh);

        assert_eq!(activity_streak(&store, day(), None), 2);
    }

    #[test]
    fn streak_is_capped_at_thirty() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        for back in 0..45 {
            store.set_fasting(day() - Duration::days(back), true);
        }
        assert_eq!(activity_streak(&store, day(), None), SHARE_STREAK_DAYS);
    }

    #[test]
    fn unsaved_selection_counts_for_the_day() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        store.set_fasting(day() - Duration::days(1), true);

        let mut current = DailyRecord::empty(day());
        assert_eq!(ShareCard::build(&store, day(), Some(&current)).streak, 0);

        current.toggle(TaskId::Isya);
        current.toggle(TaskId::Tarawih);
        let card = ShareCard::build(&store, day(), Some(&current));
        assert_eq!(card.streak, 2);
        assert_eq!(card.completed, 2);
        assert!(!card.is_fasting);
    }

    #[test]
    fn text_mentions_progress_and_streak() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        store.set_fasting(day(), true);
        store.toggle_task(day(), TaskId::Subuh);

        let text = ShareCard::build(&store, day(), None).to_text();
        assert!(text.starts_with("Progress Ramadan saya tanggal Jumat, 20 Maret 2026!"));
        assert!(text.contains("🌙 Puasa: Selesai ✅"));
        assert!(text.contains("📝 Aktivitas: 1/7 Selesai"));
        assert!(text.contains("🔥 Streak: 1 Hari"));
    }

    #[test]
    fn card_lines_share_a_width() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        let card = ShareCard::build(&store, day(), None).with_hijri("1 Syawal 1447");
        let rendered = card.render_card();
        let widths: Vec<usize> = rendered.lines().map(|l| l.width()).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]));
        assert!(rendered.contains("1 Syawal 1447"));
    }
}

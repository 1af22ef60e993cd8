use chrono::{Duration, NaiveDate};

use crate::db::KvStore;
use crate::models::ConsistencyDay;
use crate::tracker::store::DailyTaskStore;

pub const WINDOW_DAYS: usize = 30;

/// The last [`WINDOW_DAYS`] days, oldest first and `today` last.
pub fn consistency_window<S: KvStore>(
    store: &DailyTaskStore<S>,
    today: NaiveDate,
) -> Vec<ConsistencyDay> {
    (0..WINDOW_DAYS as i64)
        .rev()
        .map(|back| {
            let date = today - Duration::days(back);
            ConsistencyDay::new(date, store.get_record(date).completion_percent())
        })
        .collect()
}

/// Days in the window where anything at all was recorded.
pub fn active_days(window: &[ConsistencyDay]) -> usize {
    window.iter().filter(|d| d.percent > 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::{Intensity, TaskId};
    use crate::tracker::store::KeyLayout;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
    }

    #[test]
    fn window_is_thirty_days_oldest_first() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        let window = consistency_window(&store, today());

        assert_eq!(window.len(), WINDOW_DAYS);
        assert_eq!(window.last().map(|d| d.date), Some(today()));
        assert_eq!(window[0].date, today() - Duration::days(29));
        assert!(window.windows(2).all(|pair| pair[0].date < pair[1].date));
        assert_eq!(active_days(&window), 0);
    }

    #[test]
    fn percentages_feed_intensity() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        let yesterday = today() - Duration::days(1);

        store.set_fasting(today(), true);
        for task in TaskId::all() {
            store.toggle_task(today(), task);
        }
        store.toggle_task(yesterday, TaskId::Tadarus);
        store.set_fasting(yesterday, true);

        let window = consistency_window(&store, today());
        let last = &window[WINDOW_DAYS - 1];
        assert_eq!(last.percent, 100);
        assert_eq!(last.intensity, Intensity::Full);

        let prev = &window[WINDOW_DAYS - 2];
        assert_eq!(prev.percent, 35);
        assert_eq!(prev.intensity, Intensity::Low);
        assert_eq!(active_days(&window), 2);
    }
}

use chrono::NaiveDate;

use crate::db::KvStore;
use crate::models::{DailyRecord, StreakResult, TaskId};
use crate::tracker::store::DailyTaskStore;

/// Upper bound on how far back any streak scan walks.
pub const MAX_LOOKBACK_DAYS: u32 = 3650;

/// Count consecutive days ending at `start` for which `qualifies` holds.
///
/// `current`, when given for `start`, replaces the persisted copy of that day.
pub fn count_streak<S, F>(
    store: &DailyTaskStore<S>,
    start: NaiveDate,
    current: Option<&DailyRecord>,
    max_days: u32,
    qualifies: F,
) -> u32
where
    S: KvStore,
    F: Fn(&DailyRecord) -> bool,
{
    let mut streak = 0;
    let mut day = start;

    while streak < max_days {
        let record = match current {
            Some(rec) if rec.date == day => rec.clone(),
            _ => store.get_record(day),
        };
        if !qualifies(&record) {
            break;
        }
        streak += 1;
        match day.pred_opt() {
            Some(prev) => day = prev,
            None => break,
        }
    }

    if max_days > 0 && streak == max_days {
        log::warn!("Streak scan from {} hit the {}-day cap", start, max_days);
    }
    streak
}

pub fn calculate_streaks<S: KvStore>(
    store: &DailyTaskStore<S>,
    today: NaiveDate,
    current: Option<&DailyRecord>,
    max_days: u32,
) -> StreakResult {
    StreakResult {
        fasting: count_streak(store, today, current, max_days, |r| r.is_fasting),
        prayer: count_streak(store, today, current, max_days, DailyRecord::all_prayers_done),
        tarawih: count_streak(store, today, current, max_days, |r| {
            r.is_done(TaskId::Tarawih)
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::MemoryStore;
    use crate::models::PRAYER_TASKS;
    use crate::tracker::store::KeyLayout;
    use chrono::Duration;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()
    }

    fn store() -> DailyTaskStore<MemoryStore> {
        DailyTaskStore::new(MemoryStore::new(), KeyLayout::default())
    }

    fn all_prayers(store: &DailyTaskStore<MemoryStore>, date: NaiveDate) {
        for p in PRAYER_TASKS {
            store.toggle_task(date, p);
        }
    }

    #[test]
    fn empty_store_has_no_streaks() {
        let result = calculate_streaks(&store(), today(), None, MAX_LOOKBACK_DAYS);
        assert_eq!(result, StreakResult::default());
    }

    #[test]
    fn fasting_streak_stops_at_first_gap() {
        let store = store();
        for back in 0..5 {
            store.set_fasting(today() - Duration::days(back), true);
        }
        store.set_fasting(today() - Duration::days(5), false);
        store.set_fasting(today() - Duration::days(6), true);

        let result = calculate_streaks(&store, today(), None, MAX_LOOKBACK_DAYS);
        assert_eq!(result.fasting, 5);
        assert_eq!(result.prayer, 0);
    }

    #[test]
    fn prayer_streak_needs_all_five() {
        let store = store();
        all_prayers(&store, today());
        assert_eq!(calculate_streaks(&store, today(), None, MAX_LOOKBACK_DAYS).prayer, 1);

        store.toggle_task(today(), TaskId::Ashar);
        assert_eq!(calculate_streaks(&store, today(), None, MAX_LOOKBACK_DAYS).prayer, 0);
    }

    #[test]
    fn unfinished_today_breaks_the_run() {
        let store = store();
        let yesterday = today() - Duration::days(1);
        store.toggle_task(yesterday, TaskId::Tarawih);
        assert_eq!(calculate_streaks(&store, today(), None, MAX_LOOKBACK_DAYS).tarawih, 0);
        assert_eq!(calculate_streaks(&store, yesterday, None, MAX_LOOKBACK_DAYS).tarawih, 1);
    }

    #[test]
    fn supplied_record_overrides_persisted_today() {
        let store = store();
        let yesterday = today() - Duration::days(1);
        store.toggle_task(yesterday, TaskId::Tarawih);

        let mut current = store.get_record(today());
        current.toggle(TaskId::Tarawih);
        let result = calculate_streaks(&store, today(), Some(&current), MAX_LOOKBACK_DAYS);
        assert_eq!(result.tarawih, 2);

        store.toggle_task(yesterday, TaskId::Tarawih);
        let result = calculate_streaks(&store, today(), Some(&current), MAX_LOOKBACK_DAYS);
        assert_eq!(result.tarawih, 1);
    }

    #[test]
    fn scan_is_capped() {
        let store = store();
        for back in 0..10 {
            store.set_fasting(today() - Duration::days(back), true);
        }
        assert_eq!(calculate_streaks(&store, today(), None, 4).fasting, 4);
    }
}

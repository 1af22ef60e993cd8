use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

use crate::models::task::{FASTING_POINTS, PRAYER_TASKS, TaskId};

/// Completion state of one calendar day.
///
/// A day that was never touched is represented by [`DailyRecord::empty`];
/// storage does not distinguish "no record" from "nothing done".
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub completed_tasks: BTreeSet<TaskId>,
    pub is_fasting: bool,
}

impl DailyRecord {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            completed_tasks: BTreeSet::new(),
            is_fasting: false,
        }
    }

    pub fn is_done(&self, task: TaskId) -> bool {
        self.completed_tasks.contains(&task)
    }

    /// Flip membership of `task`; returns whether it is now completed.
    pub fn toggle(&mut self, task: TaskId) -> bool {
        if self.completed_tasks.remove(&task) {
            false
        } else {
            self.completed_tasks.insert(task);
            true
        }
    }

    pub fn all_prayers_done(&self) -> bool {
        PRAYER_TASKS.iter().all(|p| self.completed_tasks.contains(p))
    }

    pub fn has_activity(&self) -> bool {
        self.is_fasting || !self.completed_tasks.is_empty()
    }

    /// Weighted completion: task points plus fasting points, capped at 100.
    pub fn completion_percent(&self) -> u8 {
        let tasks: u32 = self.completed_tasks.iter().map(|t| t.points()).sum();
        let fasting = if self.is_fasting { FASTING_POINTS } else { 0 };
        (tasks + fasting).min(100) as u8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 1).unwrap()
    }

    #[test]
    fn toggle_reports_new_state() {
        let mut record = DailyRecord::empty(day());
        assert!(record.toggle(TaskId::Subuh));
        assert!(record.is_done(TaskId::Subuh));
        assert!(!record.toggle(TaskId::Subuh));
        assert!(record.completed_tasks.is_empty());
    }

    #[test]
    fn percent_weights_tasks_and_fasting() {
        let mut record = DailyRecord::empty(day());
        assert_eq!(record.completion_percent(), 0);

        record.toggle(TaskId::Tarawih);
        assert_eq!(record.completion_percent(), 15);

        record.is_fasting = true;
        assert_eq!(record.completion_percent(), 35);

        for task in TaskId::all() {
            record.completed_tasks.insert(task);
        }
        assert_eq!(record.completion_percent(), 100);
    }

    #[test]
    fn all_prayers_requires_each_of_the_five() {
        let mut record = DailyRecord::empty(day());
        for p in PRAYER_TASKS {
            record.toggle(p);
        }
        assert!(record.all_prayers_done());
        record.toggle(TaskId::Ashar);
        assert!(!record.all_prayers_done());
        assert!(record.has_activity());
    }
}

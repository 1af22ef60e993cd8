use chrono::NaiveDate;

use crate::db::KvStore;
use crate::tracker::store::DailyTaskStore;

impl<S: KvStore> DailyTaskStore<S> {
    /// Reflection text for `date`, empty if nothing was written.
    pub fn journal(&self, date: NaiveDate) -> String {
        self.read(&self.keys().journal(date)).unwrap_or_default()
    }

    pub fn save_journal(&self, date: NaiveDate, text: &str) {
        self.write(&self.keys().journal(date), text);
    }
}

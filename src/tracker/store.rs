use chrono::NaiveDate;
use std::cell::{Cell, RefCell};
use std::collections::BTreeSet;
use std::str::FromStr;

use crate::db::KvStore;
use crate::models::{DailyRecord, TaskId};

pub const DATE_FORMAT: &str = "%Y-%m-%d";

pub fn date_key(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

// ─── Key layout ──────────────────────────────────────────────────────────────

/// Storage key names. With `prefix = "ramadan-"` the keys match the web app's.
#[derive(Debug, Clone, Default)]
pub struct KeyLayout {
    prefix: String,
}

impl KeyLayout {
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    pub fn tracker(&self, date: NaiveDate) -> String {
        format!("{}tracker-{}", self.prefix, date_key(date))
    }

    pub fn fasting(&self, date: NaiveDate) -> String {
        format!("{}fasting-{}", self.prefix, date_key(date))
    }

    pub fn journal(&self, date: NaiveDate) -> String {
        format!("{}journal-{}", self.prefix, date_key(date))
    }

    pub fn tasbih(&self) -> String {
        format!("{}tasbih", self.prefix)
    }
}

// ─── Change notification ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TrackerEvent {
    TaskToggled {
        date: NaiveDate,
        task: TaskId,
        completed: bool,
    },
    FastingSet {
        date: NaiveDate,
        fasting: bool,
    },
}

impl TrackerEvent {
    pub fn date(&self) -> NaiveDate {
        match self {
            TrackerEvent::TaskToggled { date, .. } | TrackerEvent::FastingSet { date, .. } => {
                *date
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn Fn(&TrackerEvent)>;

// ─── Store ───────────────────────────────────────────────────────────────────

/// Per-day task and fasting persistence over a [`KvStore`].
///
/// Storage failures never reach the caller: reads fall back to the empty
/// record and failed writes are logged. The record returned from a mutation
/// is what the session should display either way.
///
/// Listeners run synchronously after each write and must not subscribe or
/// unsubscribe from inside the callback.
pub struct DailyTaskStore<S: KvStore> {
    kv: S,
    keys: KeyLayout,
    listeners: RefCell<Vec<(SubscriptionId, Listener)>>,
    next_id: Cell<u64>,
}

impl<S: KvStore> DailyTaskStore<S> {
    pub fn new(kv: S, keys: KeyLayout) -> Self {
        Self {
            kv,
            keys,
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    pub fn keys(&self) -> &KeyLayout {
        &self.keys
    }

    pub fn get_record(&self, date: NaiveDate) -> DailyRecord {
        let completed_tasks = self
            .read(&self.keys.tracker(date))
            .map(|raw| decode_tasks(&raw, date))
            .unwrap_or_default();
        let is_fasting = self.read(&self.keys.fasting(date)).as_deref() == Some("true");

        DailyRecord {
            date,
            completed_tasks,
            is_fasting,
        }
    }

    pub fn toggle_task(&self, date: NaiveDate, task: TaskId) -> DailyRecord {
        self.toggle_task_on(self.get_record(date), task)
    }

    /// Flip `task` on a record the caller already holds and persist the task list.
    ///
    /// Use this when the caller's copy is authoritative, as a failed earlier
    /// write means storage may lag behind it.
    pub fn toggle_task_on(&self, mut record: DailyRecord, task: TaskId) -> DailyRecord {
        let date = record.date;
        let completed = record.toggle(task);

        let ids: Vec<&str> = record.completed_tasks.iter().map(|t| t.as_str()).collect();
        match serde_json::to_string(&ids) {
            Ok(json) => self.write(&self.keys.tracker(date), &json),
            Err(e) => log::warn!("Could not encode tasks for {}: {}", date, e),
        }

        self.notify(&TrackerEvent::TaskToggled {
            date,
            task,
            completed,
        });
        record
    }

    pub fn set_fasting(&self, date: NaiveDate, fasting: bool) -> DailyRecord {
        self.set_fasting_on(self.get_record(date), fasting)
    }

    /// Like [`toggle_task_on`](Self::toggle_task_on), for the fasting flag.
    pub fn set_fasting_on(&self, mut record: DailyRecord, fasting: bool) -> DailyRecord {
        let date = record.date;
        record.is_fasting = fasting;
        self.write(&self.keys.fasting(date), if fasting { "true" } else { "false" });
        self.notify(&TrackerEvent::FastingSet { date, fasting });
        record
    }

    pub fn subscribe(&self, listener: impl Fn(&TrackerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn notify(&self, event: &TrackerEvent) {
        for (_, listener) in self.listeners.borrow().iter() {
            listener(event);
        }
    }

    pub(crate) fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("Reading '{}' failed, using default: {}", key, e);
                None
            }
        }
    }

    pub(crate) fn write(&self, key: &str, value: &str) {
        match self.kv.set(key, value) {
            Ok(()) => log::debug!("Stored '{}'", key),
            Err(e) => log::warn!("Writing '{}' failed, change kept in memory only: {}", key, e),
        }
    }
}

fn decode_tasks(raw: &str, date: NaiveDate) -> BTreeSet<TaskId> {
    let ids: Vec<String> = match serde_json::from_str(raw) {
        Ok(ids) => ids,
        Err(e) => {
            log::warn!("Ignoring corrupt task list for {}: {}", date, e);
            return BTreeSet::new();
        }
    };

    ids.iter()
        .filter_map(|id| match TaskId::from_str(id) {
            Ok(task) => Some(task),
            Err(_) => {
                log::debug!("Skipping unknown task id '{}' on {}", id, date);
                None
            }
        })
        .collect()
}

pub mod badge;
pub mod record;
pub mod stats;
pub mod tasbih;
pub mod task;

pub use badge::{Badge, badge_for, next_badge};
pub use record::DailyRecord;
pub use stats::{ConsistencyDay, Intensity, StreakResult};
pub use tasbih::{DHIKR_OPTIONS, TasbihState};
pub use task::{FASTING_POINTS, PRAYER_TASKS, TaskId};

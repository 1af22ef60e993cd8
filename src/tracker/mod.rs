pub mod consistency;
pub mod journal;
pub mod share;
pub mod store;
pub mod streaks;
pub mod tasbih;

pub use consistency::{WINDOW_DAYS, active_days, consistency_window};
pub use share::{ShareCard, activity_streak};
pub use store::{DATE_FORMAT, DailyTaskStore, KeyLayout, SubscriptionId, TrackerEvent};
pub use streaks::{MAX_LOOKBACK_DAYS, calculate_streaks};

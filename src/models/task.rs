use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Points earned for fasting on a given day.
pub const FASTING_POINTS: u32 = 20;

/// The five obligatory prayers, in daily order.
pub const PRAYER_TASKS: [TaskId; 5] = [
    TaskId::Subuh,
    TaskId::Zuhur,
    TaskId::Ashar,
    TaskId::Maghrib,
    TaskId::Isya,
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskId {
    Subuh,
    Zuhur,
    Ashar,
    Maghrib,
    Isya,
    Tarawih,
    Tadarus,
}

impl TaskId {
    pub fn all() -> [TaskId; 7] {
        [
            TaskId::Subuh,
            TaskId::Zuhur,
            TaskId::Ashar,
            TaskId::Maghrib,
            TaskId::Isya,
            TaskId::Tarawih,
            TaskId::Tadarus,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskId::Subuh => "subuh",
            TaskId::Zuhur => "zuhur",
            TaskId::Ashar => "ashar",
            TaskId::Maghrib => "maghrib",
            TaskId::Isya => "isya",
            TaskId::Tarawih => "tarawih",
            TaskId::Tadarus => "tadarus",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            TaskId::Subuh => "Shalat Subuh",
            TaskId::Zuhur => "Shalat Zuhur",
            TaskId::Ashar => "Shalat Ashar",
            TaskId::Maghrib => "Shalat Maghrib",
            TaskId::Isya => "Shalat Isya",
            TaskId::Tarawih => "Shalat Tarawih",
            TaskId::Tadarus => "Tadarus Al-Qur'an",
        }
    }

    /// Weight used for the same-day progress percentage. Streaks ignore it.
    pub fn points(&self) -> u32 {
        match self {
            TaskId::Tarawih | TaskId::Tadarus => 15,
            _ => 10,
        }
    }

    pub fn is_prayer(&self) -> bool {
        PRAYER_TASKS.contains(self)
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for TaskId {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "subuh" => Ok(TaskId::Subuh),
            "zuhur" => Ok(TaskId::Zuhur),
            "ashar" => Ok(TaskId::Ashar),
            "maghrib" => Ok(TaskId::Maghrib),
            "isya" => Ok(TaskId::Isya),
            "tarawih" => Ok(TaskId::Tarawih),
            "tadarus" => Ok(TaskId::Tadarus),
            _ => Err(anyhow::anyhow!("Unknown task: {}", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_day_is_worth_one_hundred_points() {
        let tasks: u32 = TaskId::all().iter().map(|t| t.points()).sum();
        assert_eq!(tasks + FASTING_POINTS, 100);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Maghrib".parse::<TaskId>().unwrap(), TaskId::Maghrib);
        assert_eq!("TADARUS".parse::<TaskId>().unwrap(), TaskId::Tadarus);
        assert!("puasa".parse::<TaskId>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_ids() {
        let json = serde_json::to_string(&TaskId::Isya).unwrap();
        assert_eq!(json, "\"isya\"");
        for task in TaskId::all() {
            assert_eq!(json_id(task), task.as_str());
        }
    }

    fn json_id(task: TaskId) -> String {
        serde_json::to_value(task)
            .unwrap()
            .as_str()
            .unwrap()
            .to_string()
    }

    #[test]
    fn only_five_tasks_are_prayers() {
        let prayers = TaskId::all().iter().filter(|t| t.is_prayer()).count();
        assert_eq!(prayers, 5);
        assert!(!TaskId::Tarawih.is_prayer());
    }
}

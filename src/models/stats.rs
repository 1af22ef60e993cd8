use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Consecutive qualifying days ending today, per category.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StreakResult {
    pub fasting: u32,
    pub prayer: u32,
    pub tarawih: u32,
}

/// Display tier for one heatmap cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Intensity {
    None,
    Low,
    Medium,
    High,
    Full,
}

impl Intensity {
    /// Thresholds: 0, >0, >=40, >=70, >=95.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0 => Intensity::None,
            1..=39 => Intensity::Low,
            40..=69 => Intensity::Medium,
            70..=94 => Intensity::High,
            _ => Intensity::Full,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Intensity::None => "○",
            Intensity::Low => "◔",
            Intensity::Medium => "◑",
            Intensity::High => "◕",
            Intensity::Full => "●",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsistencyDay {
    pub date: NaiveDate,
    pub percent: u8,
    pub intensity: Intensity,
}

impl ConsistencyDay {
    pub fn new(date: NaiveDate, percent: u8) -> Self {
        Self {
            date,
            percent,
            intensity: Intensity::from_percent(percent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_boundaries() {
        assert_eq!(Intensity::from_percent(0), Intensity::None);
        assert_eq!(Intensity::from_percent(1), Intensity::Low);
        assert_eq!(Intensity::from_percent(39), Intensity::Low);
        assert_eq!(Intensity::from_percent(40), Intensity::Medium);
        assert_eq!(Intensity::from_percent(70), Intensity::High);
        assert_eq!(Intensity::from_percent(94), Intensity::High);
        assert_eq!(Intensity::from_percent(95), Intensity::Full);
        assert_eq!(Intensity::from_percent(100), Intensity::Full);
    }
}

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Badge {
    pub threshold: u32,
    pub label: &'static str,
    pub icon: &'static str,
}

/// Ordered from the highest threshold down.
pub const BADGE_TIERS: [Badge; 5] = [
    Badge {
        threshold: 30,
        label: "30 Hari Kemenangan",
        icon: "🏆",
    },
    Badge {
        threshold: 21,
        label: "21 Hari Konsisten",
        icon: "🔥",
    },
    Badge {
        threshold: 14,
        label: "14 Hari Berkah",
        icon: "✨",
    },
    Badge {
        threshold: 7,
        label: "7 Hari Semangat",
        icon: "⭐",
    },
    Badge {
        threshold: 3,
        label: "3 Hari Awal",
        icon: "🌱",
    },
];

pub const DEFAULT_BADGE: Badge = Badge {
    threshold: 0,
    label: "Pejuang Ramadan",
    icon: "🤲",
};

/// Highest tier whose threshold the fasting streak meets.
pub fn badge_for(streak: u32) -> Badge {
    BADGE_TIERS
        .iter()
        .find(|tier| streak >= tier.threshold)
        .copied()
        .unwrap_or(DEFAULT_BADGE)
}

/// The next tier to work towards, if any.
pub fn next_badge(streak: u32) -> Option<Badge> {
    BADGE_TIERS
        .iter()
        .rev()
        .find(|tier| streak < tier.threshold)
        .copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_documented_tiers() {
        assert_eq!(badge_for(0), DEFAULT_BADGE);
        assert_eq!(badge_for(2), DEFAULT_BADGE);
        assert_eq!(badge_for(3).label, "3 Hari Awal");
        assert_eq!(badge_for(7).label, "7 Hari Semangat");
        assert_eq!(badge_for(13).label, "7 Hari Semangat");
        assert_eq!(badge_for(30).label, "30 Hari Kemenangan");
        assert_eq!(badge_for(9999), badge_for(30));
    }

    #[test]
    fn tiers_never_decrease() {
        let mut last = 0;
        for streak in 0..100 {
            let threshold = badge_for(streak).threshold;
            assert!(threshold >= last);
            last = threshold;
        }
    }

    #[test]
    fn next_badge_points_at_following_tier() {
        assert_eq!(next_badge(0).map(|b| b.threshold), Some(3));
        assert_eq!(next_badge(7).map(|b| b.threshold), Some(14));
        assert_eq!(next_badge(30), None);
    }
}

use serde::{Deserialize, Serialize};

/// Target value meaning "count without wrapping".
pub const UNLIMITED_TARGET: u32 = 1000;

pub const TARGETS: [u32; 3] = [33, 99, UNLIMITED_TARGET];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DhikrOption {
    pub name: &'static str,
    pub arabic: &'static str,
    pub meaning: &'static str,
}

/// The last entry is the user-defined dhikr; its text lives in `custom_text`.
pub const DHIKR_OPTIONS: [DhikrOption; 6] = [
    DhikrOption {
        name: "Subhanallah",
        arabic: "سُبْحَانَ ٱللَّٰهِ",
        meaning: "Maha Suci Allah",
    },
    DhikrOption {
        name: "Alhamdulillah",
        arabic: "ٱلْحَمْدُ لِلَّٰهِ",
        meaning: "Segala Puji Bagi Allah",
    },
    DhikrOption {
        name: "Allahu Akbar",
        arabic: "ٱللَّٰهُ أَكْبَرُ",
        meaning: "Allah Maha Besar",
    },
    DhikrOption {
        name: "Astaghfirullah",
        arabic: "أَسْتَغْفِرُ ٱللَّٰهَ",
        meaning: "Aku memohon ampun kepada Allah",
    },
    DhikrOption {
        name: "La ilaha illallah",
        arabic: "لَا إِلَٰهَ إِلَّا ٱللَّٰهُ",
        meaning: "Tiada Tuhan selain Allah",
    },
    DhikrOption {
        name: "Dzikir Kustom",
        arabic: "",
        meaning: "",
    },
];

const CUSTOM_INDEX: usize = DHIKR_OPTIONS.len() - 1;

fn default_target() -> u32 {
    33
}
fn default_custom_text() -> String {
    "Salawat...".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TasbihState {
    #[serde(default)]
    pub dhikr_index: usize,
    #[serde(default = "default_custom_text")]
    pub custom_text: String,
    #[serde(default = "default_target")]
    pub target: u32,
    #[serde(default)]
    pub count: u32,
}

impl Default for TasbihState {
    fn default() -> Self {
        Self {
            dhikr_index: 0,
            custom_text: default_custom_text(),
            target: default_target(),
            count: 0,
        }
    }
}

impl TasbihState {
    pub fn with_target(target: u32) -> Self {
        Self {
            target: target.max(1),
            ..Self::default()
        }
    }

    pub fn is_unlimited(&self) -> bool {
        self.target == UNLIMITED_TARGET
    }

    /// Count one bead. Returns true when this tap lands exactly on the target.
    pub fn tap(&mut self) -> bool {
        if self.count >= self.target && !self.is_unlimited() {
            self.count = 1;
        } else {
            self.count = self.count.saturating_add(1);
        }
        !self.is_unlimited() && self.count == self.target
    }

    pub fn reset(&mut self) {
        self.count = 0;
    }

    pub fn next_dhikr(&mut self) {
        self.dhikr_index = (self.dhikr_index + 1) % DHIKR_OPTIONS.len();
        self.count = 0;
    }

    pub fn prev_dhikr(&mut self) {
        self.dhikr_index = (self.dhikr_index + DHIKR_OPTIONS.len() - 1) % DHIKR_OPTIONS.len();
        self.count = 0;
    }

    pub fn set_target(&mut self, target: u32) {
        self.target = target.max(1);
    }

    /// Move to the next preset target, wrapping back to the first.
    pub fn cycle_target(&mut self) {
        let next = TARGETS
            .iter()
            .position(|t| *t == self.target)
            .map(|i| TARGETS[(i + 1) % TARGETS.len()])
            .unwrap_or(TARGETS[0]);
        self.target = next;
    }

    pub fn progress_percent(&self) -> u8 {
        if self.is_unlimited() {
            return 100;
        }
        let ratio = self.count as f64 / self.target.max(1) as f64;
        (ratio * 100.0).min(100.0).round() as u8
    }

    pub fn dhikr(&self) -> DhikrOption {
        DHIKR_OPTIONS[self.dhikr_index.min(CUSTOM_INDEX)]
    }

    /// Text to recite: the Arabic phrase, or the custom text for the custom slot.
    pub fn recitation(&self) -> &str {
        if self.dhikr_index >= CUSTOM_INDEX {
            &self.custom_text
        } else {
            self.dhikr().arabic
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wraps_to_one_after_target() {
        let mut state = TasbihState::with_target(3);
        assert!(!state.tap());
        assert!(!state.tap());
        assert!(state.tap());
        assert_eq!(state.count, 3);
        state.tap();
        assert_eq!(state.count, 1);
    }

    #[test]
    fn unlimited_never_wraps() {
        let mut state = TasbihState::with_target(UNLIMITED_TARGET);
        state.count = UNLIMITED_TARGET;
        assert!(!state.tap());
        assert_eq!(state.count, UNLIMITED_TARGET + 1);
        assert_eq!(state.progress_percent(), 100);
    }

    #[test]
    fn unlimited_count_saturates() {
        let mut state = TasbihState::with_target(UNLIMITED_TARGET);
        state.count = u32::MAX - 1;
        state.tap();
        state.tap();
        assert_eq!(state.count, u32::MAX);
    }

    #[test]
    fn switching_dhikr_resets_count_and_wraps() {
        let mut state = TasbihState::default();
        state.tap();
        state.prev_dhikr();
        assert_eq!(state.dhikr_index, DHIKR_OPTIONS.len() - 1);
        assert_eq!(state.count, 0);
        assert_eq!(state.recitation(), "Salawat...");
        state.next_dhikr();
        assert_eq!(state.dhikr_index, 0);
        assert_eq!(state.dhikr().name, "Subhanallah");
    }

    #[test]
    fn cycle_target_walks_presets() {
        let mut state = TasbihState::default();
        state.cycle_target();
        assert_eq!(state.target, 99);
        state.cycle_target();
        assert!(state.is_unlimited());
        state.cycle_target();
        assert_eq!(state.target, 33);

        state.set_target(7);
        state.cycle_target();
        assert_eq!(state.target, 33);
    }

    #[test]
    fn progress_is_capped() {
        let mut state = TasbihState::with_target(33);
        state.count = 11;
        assert_eq!(state.progress_percent(), 33);
        state.count = 40;
        assert_eq!(state.progress_percent(), 100);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let state: TasbihState = serde_json::from_str(r#"{"count": 5}"#).unwrap();
        assert_eq!(state.count, 5);
        assert_eq!(state.target, 33);
        assert_eq!(state.custom_text, "Salawat...");
    }
}

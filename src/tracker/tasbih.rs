use crate::db::KvStore;
use crate::models::TasbihState;
use crate::tracker::store::DailyTaskStore;

impl<S: KvStore> DailyTaskStore<S> {
    /// Saved counter, or a fresh one at `default_target` when none is stored.
    pub fn load_tasbih(&self, default_target: u32) -> TasbihState {
        let Some(raw) = self.read(&self.keys().tasbih()) else {
            return TasbihState::with_target(default_target);
        };
        match serde_json::from_str(&raw) {
            Ok(state) => state,
            Err(e) => {
                log::warn!("Ignoring corrupt tasbih state: {}", e);
                TasbihState::with_target(default_target)
            }
        }
    }

    pub fn save_tasbih(&self, state: &TasbihState) {
        match serde_json::to_string(state) {
            Ok(json) => self.write(&self.keys().tasbih(), &json),
            Err(e) => log::warn!("Could not encode tasbih state: {}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::db::{KvStore, MemoryStore};
    use crate::tracker::store::{DailyTaskStore, KeyLayout};

    #[test]
    fn counter_survives_save_and_load() {
        let store = DailyTaskStore::new(MemoryStore::new(), KeyLayout::default());
        let mut state = store.load_tasbih(99);
        assert_eq!(state.target, 99);
        assert_eq!(state.count, 0);

        state.tap();
        state.tap();
        state.next_dhikr();
        state.tap();
        store.save_tasbih(&state);

        let loaded = store.load_tasbih(33);
        assert_eq!(loaded, state);
        assert_eq!(loaded.count, 1);
        assert_eq!(loaded.dhikr_index, 1);
    }

    #[test]
    fn corrupt_state_falls_back_to_defaults() {
        let kv = MemoryStore::new();
        kv.set("tasbih", "[1, 2").unwrap();
        let store = DailyTaskStore::new(kv, KeyLayout::default());
        let state = store.load_tasbih(33);
        assert_eq!(state.count, 0);
        assert_eq!(state.target, 33);
    }
}

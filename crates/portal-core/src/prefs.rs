use std::collections::HashMap;

use tracing::debug;

pub const SIDEBAR_COLLAPSED_KEY: &str = "sidebarCollapsed";

/// Persistence port for the handful of string-keyed UI preferences. The
/// browser frontend backs this with `window.localStorage`; tests use
/// [`MemoryPrefs`]. Writes are best-effort and must not fail loudly.
pub trait PrefStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

#[derive(Debug, Clone, Default)]
pub struct MemoryPrefs {
    map: HashMap<String, String>,
}

impl PrefStore for MemoryPrefs {
    fn get(&self, key: &str) -> Option<String> {
        self.map.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.map.insert(key.to_string(), value.to_string());
    }
}

/// Absence or any unexpected value means "not collapsed".
pub fn load_sidebar_collapsed(store: &impl PrefStore) -> bool {
    matches!(
        store.get(SIDEBAR_COLLAPSED_KEY).as_deref(),
        Some("true")
    )
}

pub fn save_sidebar_collapsed(store: &mut impl PrefStore, collapsed: bool) {
    let value = if collapsed { "true" } else { "false" };
    store.set(SIDEBAR_COLLAPSED_KEY, value);
    debug!(collapsed, "persisted sidebar state");
}

#[cfg(test)]
mod tests {
    use super::{
        MemoryPrefs, PrefStore, SIDEBAR_COLLAPSED_KEY, load_sidebar_collapsed,
        save_sidebar_collapsed,
    };

    #[test]
    fn absent_flag_means_expanded() {
        let store = MemoryPrefs::default();
        assert!(!load_sidebar_collapsed(&store));
    }

    #[test]
    fn flag_round_trips_as_true_false_strings() {
        let mut store = MemoryPrefs::default();

        save_sidebar_collapsed(&mut store, true);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("true"));
        assert!(load_sidebar_collapsed(&store));

        save_sidebar_collapsed(&mut store, false);
        assert_eq!(store.get(SIDEBAR_COLLAPSED_KEY).as_deref(), Some("false"));
        assert!(!load_sidebar_collapsed(&store));
    }

    #[test]
    fn garbage_value_degrades_to_expanded() {
        let mut store = MemoryPrefs::default();
        store.set(SIDEBAR_COLLAPSED_KEY, "TRUE");
        assert!(!load_sidebar_collapsed(&store));
    }
}

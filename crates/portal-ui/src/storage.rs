use portal_core::prefs::PrefStore;

/// `PrefStore` over `window.localStorage`. A missing window or a storage
/// backend the browser refuses to hand out degrades to "nothing stored":
/// reads come back empty and writes are dropped, so the sidebar still
/// toggles, it just stops surviving reloads.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserPrefs;

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

impl PrefStore for BrowserPrefs {
    fn get(&self, key: &str) -> Option<String> {
        local_storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = local_storage() {
            let _ = storage.set_item(key, value);
        }
    }
}

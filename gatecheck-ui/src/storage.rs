//! Local storage capability for persisted UI state
//!
//! The stores never touch `window.localStorage` directly; they take a
//! `SelectionStorage` so the same logic runs in the browser, during
//! pre-hydration where no storage exists, and in unit tests.

/// Key-value storage for small persisted UI values.
///
/// Writes are best-effort: a quota error or missing backend is not
/// surfaced to callers.
pub trait SelectionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// `window.localStorage`-backed storage.
///
/// Degrades to a no-op when no window or storage object is available,
/// so store mutators stay safe outside a hydrated browser context.
/// Off-wasm builds (server-side rendering, unit tests) compile to the
/// no-op path directly.
#[derive(Clone, Copy, Default)]
pub struct BrowserStorage;

#[cfg(target_arch = "wasm32")]
fn backing() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SelectionStorage for BrowserStorage {
    #[allow(unused_variables)]
    fn get(&self, key: &str) -> Option<String> {
        #[cfg(target_arch = "wasm32")]
        {
            backing().and_then(|s| s.get_item(key).ok().flatten())
        }
        #[cfg(not(target_arch = "wasm32"))]
        {
            None
        }
    }

    #[allow(unused_variables)]
    fn set(&self, key: &str, value: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = backing() {
            let _ = storage.set_item(key, value);
        }
    }

    #[allow(unused_variables)]
    fn remove(&self, key: &str) {
        #[cfg(target_arch = "wasm32")]
        if let Some(storage) = backing() {
            let _ = storage.remove_item(key);
        }
    }
}

/// In-memory storage for tests.
#[cfg(any(test, feature = "test-utils"))]
#[derive(Default)]
pub struct MemoryStorage {
    entries: std::cell::RefCell<std::collections::HashMap<String, String>>,
}

#[cfg(any(test, feature = "test-utils"))]
impl SelectionStorage for MemoryStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn browser_storage_is_a_noop_off_browser() {
        let storage = BrowserStorage;
        storage.set("k", "v");
        assert_eq!(storage.get("k"), None);
        storage.remove("k");
    }

    #[test]
    fn memory_storage_round_trips() {
        let storage = MemoryStorage::default();
        storage.set("k", "41");
        assert_eq!(storage.get("k"), Some("41".to_string()));
        storage.remove("k");
        assert_eq!(storage.get("k"), None);
    }
}

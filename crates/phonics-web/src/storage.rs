use phonics_core::PreferenceStore;

/// Preferences backed by `window.localStorage`.
///
/// Storage can be missing (private mode, sandboxed iframes) or throw on
/// write when full. Either way the app keeps running on in-memory state
/// and the failure is only logged.
pub struct LocalStore {
    storage: Option<web_sys::Storage>,
}

impl LocalStore {
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        if storage.is_none() {
            log::warn!("localStorage unavailable, preferences will not persist");
        }
        Self { storage }
    }
}

impl PreferenceStore for LocalStore {
    fn get(&self, key: &str) -> Option<String> {
        let storage = self.storage.as_ref()?;
        match storage.get_item(key) {
            Ok(value) => value,
            Err(err) => {
                log::warn!("localStorage read {key} failed: {err:?}");
                None
            }
        }
    }

    fn set(&mut self, key: &str, value: &str) {
        if let Some(storage) = &self.storage {
            if let Err(err) = storage.set_item(key, value) {
                log::warn!("localStorage write {key} failed: {err:?}");
            }
        }
    }
}

use std::collections::HashMap;
use std::str::FromStr;

use crate::content::{ItemLength, Language};
use crate::navigator::CaseMode;

pub const KEY_LANGUAGE: &str = "phonicsLanguage";
pub const KEY_ITEM_LENGTH: &str = "phonicsWordLength";
pub const KEY_CASE_MODE: &str = "phonicsLetterCase";
pub const KEY_DARK_MODE: &str = "phonicsDarkMode";
pub const KEY_AUDIO: &str = "phonicsAudio";
pub const KEY_ZOOM: &str = "phonicsZoom";

/// String key/value persistence. Last write wins; no schema versioning.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-process store for tests and hosts without browser storage.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    values: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

/// Settings that survive a page reload.
#[derive(Debug, Clone, PartialEq)]
pub struct Preferences {
    pub language: Language,
    pub item_length: ItemLength,
    pub case_mode: CaseMode,
    pub dark_mode: bool,
    pub audio_enabled: bool,
    pub zoom_level: f32,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            language: Language::default(),
            item_length: ItemLength::LETTERS,
            case_mode: CaseMode::default(),
            dark_mode: false,
            audio_enabled: true,
            zoom_level: 1.0,
        }
    }
}

impl Preferences {
    /// Read every key, keeping the default for missing or garbled values.
    pub fn load(store: &dyn PreferenceStore) -> Self {
        let d = Self::default();
        let zoom_level: f32 = read(store, KEY_ZOOM, d.zoom_level);
        Self {
            language: read(store, KEY_LANGUAGE, d.language),
            item_length: ItemLength::new(read(store, KEY_ITEM_LENGTH, d.item_length.get() as u32)),
            case_mode: read(store, KEY_CASE_MODE, d.case_mode),
            dark_mode: read(store, KEY_DARK_MODE, d.dark_mode),
            audio_enabled: read(store, KEY_AUDIO, d.audio_enabled),
            zoom_level: if zoom_level.is_finite() && zoom_level > 0.0 {
                zoom_level
            } else {
                d.zoom_level
            },
        }
    }

    pub fn save(&self, store: &mut dyn PreferenceStore) {
        store.set(KEY_LANGUAGE, self.language.code());
        store.set(KEY_ITEM_LENGTH, &self.item_length.to_string());
        store.set(KEY_CASE_MODE, self.case_mode.as_str());
        store.set(KEY_DARK_MODE, &self.dark_mode.to_string());
        store.set(KEY_AUDIO, &self.audio_enabled.to_string());
        store.set(KEY_ZOOM, &format!("{:.2}", self.zoom_level));
    }
}

fn read<T: FromStr>(store: &dyn PreferenceStore, key: &str, default: T) -> T {
    match store.get(key) {
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            log::warn!("ignoring stored {key}={raw:?}");
            default
        }),
        None => default,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_store_gives_defaults() {
        let store = MemoryStore::new();
        assert_eq!(Preferences::load(&store), Preferences::default());
    }

    #[test]
    fn save_then_load() {
        let mut store = MemoryStore::new();
        let prefs = Preferences {
            language: Language::Japanese,
            item_length: ItemLength::new(3),
            case_mode: CaseMode::Both,
            dark_mode: true,
            audio_enabled: false,
            zoom_level: 1.5,
        };
        prefs.save(&mut store);
        assert_eq!(store.get(KEY_ITEM_LENGTH).as_deref(), Some("3"));
        assert_eq!(store.get(KEY_CASE_MODE).as_deref(), Some("both"));
        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn garbled_values_fall_back_per_key() {
        let mut store = MemoryStore::new();
        store.set(KEY_LANGUAGE, "klingon");
        store.set(KEY_ITEM_LENGTH, "9");
        store.set(KEY_DARK_MODE, "yes");
        store.set(KEY_ZOOM, "NaN");
        store.set(KEY_CASE_MODE, "lowercase");
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.language, Language::English);
        assert_eq!(prefs.item_length, ItemLength::LETTERS);
        assert!(!prefs.dark_mode);
        assert_eq!(prefs.zoom_level, 1.0);
        assert_eq!(prefs.case_mode, CaseMode::Lowercase);
    }

    #[test]
    fn word_length_key_name_is_stable() {
        let mut store = MemoryStore::new();
        store.set("phonicsWordLength", "2");
        assert_eq!(Preferences::load(&store).item_length, ItemLength::new(2));
    }
}

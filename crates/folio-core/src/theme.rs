//! Dark/light theme preference, the only state persisted across visits.

use crate::constants::THEME_STORAGE_KEY;
use fnv::FnvHashMap;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Dark => "dark",
            Self::Light => "light",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }
}

/// Key-value preference storage (`localStorage` in the browser).
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    /// Returns false if the value could not be stored.
    fn set(&mut self, key: &str, value: &str) -> bool;
}

/// In-memory store for hosts without persistent storage.
#[derive(Clone, Debug, Default)]
pub struct MemoryStore {
    values: FnvHashMap<String, String>,
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> bool {
        self.values.insert(key.to_string(), value.to_string());
        true
    }
}

/// Stored theme, falling back to dark when missing or unrecognised.
pub fn load_theme<S: PreferenceStore + ?Sized>(store: &S) -> Theme {
    store
        .get(THEME_STORAGE_KEY)
        .and_then(|v| Theme::parse(&v))
        .unwrap_or_default()
}

/// Flip `current`, persist the result and return it.
pub fn toggle_theme<S: PreferenceStore + ?Sized>(current: Theme, store: &mut S) -> Theme {
    let next = current.toggled();
    if !store.set(THEME_STORAGE_KEY, next.as_str()) {
        log::warn!("[theme] could not persist {}", next.as_str());
    }
    next
}

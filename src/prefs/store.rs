use std::collections::HashMap;

use crate::foundation::error::{DeckError, DeckResult};

/// Key under which the UI theme is persisted.
pub const THEME_KEY: &str = "theme";

/// String key-value persistence collaborator (browser-style local storage).
pub trait KeyValueStore {
    /// Value stored under `key`.
    fn get(&self, key: &str) -> Option<String>;
    /// Store `value` under `key`.
    fn set(&mut self, key: &str, value: &str) -> DeckResult<()>;
    /// Remove `key`; returns whether it existed.
    fn remove(&mut self, key: &str) -> bool;
}

/// In-memory [`KeyValueStore`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryKeyValueStore {
    entries: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> DeckResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> bool {
        self.entries.remove(key).is_some()
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
/// Editor color scheme.
pub enum Theme {
    /// Light scheme.
    #[default]
    Light,
    /// Dark scheme.
    Dark,
}

impl Theme {
    /// Persisted token.
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// The other scheme.
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl std::str::FromStr for Theme {
    type Err = DeckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            other => Err(DeckError::validation(format!("unknown theme '{other}'"))),
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Theme to start with: the saved one if valid, otherwise the system preference.
pub fn initial_theme(store: &impl KeyValueStore, system_prefers_dark: bool) -> Theme {
    if let Some(saved) = store.get(THEME_KEY) {
        match saved.parse() {
            Ok(theme) => return theme,
            Err(e) => tracing::debug!(error = %e, "ignoring saved theme"),
        }
    }
    if system_prefers_dark {
        Theme::Dark
    } else {
        Theme::Light
    }
}

/// Persist `theme` under [`THEME_KEY`].
pub fn save_theme(store: &mut impl KeyValueStore, theme: Theme) -> DeckResult<()> {
    store.set(THEME_KEY, theme.as_str())
}

#[cfg(test)]
#[path = "../../tests/unit/prefs/store.rs"]
mod tests;

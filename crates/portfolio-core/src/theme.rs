//! Theme State
//!
//! Tri-state appearance preference (light / dark / follow the host),
//! persisted through an injected [`PreferenceStore`].

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::preference::PreferenceStore;

/// Storage slot holding the theme preference
pub const THEME_KEY: &str = "theme";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    Light,
    Dark,
    /// Follow the host's prefers-dark signal
    #[default]
    System,
}

/// The appearance actually rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Appearance {
    Light,
    Dark,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("unknown theme preference `{0}`")]
pub struct ParseThemeError(pub String);

impl ThemePreference {
    pub const ALL: [ThemePreference; 3] = [
        ThemePreference::Light,
        ThemePreference::Dark,
        ThemePreference::System,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemePreference::Light => "light",
            ThemePreference::Dark => "dark",
            ThemePreference::System => "system",
        }
    }

    pub fn resolve(self, prefers_dark: bool) -> Appearance {
        match self {
            ThemePreference::Light => Appearance::Light,
            ThemePreference::Dark => Appearance::Dark,
            ThemePreference::System if prefers_dark => Appearance::Dark,
            ThemePreference::System => Appearance::Light,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = ParseThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "light" => Ok(ThemePreference::Light),
            "dark" => Ok(ThemePreference::Dark),
            "system" => Ok(ThemePreference::System),
            other => Err(ParseThemeError(other.to_string())),
        }
    }
}

impl Appearance {
    pub fn as_str(&self) -> &'static str {
        match self {
            Appearance::Light => "light",
            Appearance::Dark => "dark",
        }
    }
}

/// Current preference plus the store it is persisted to.
///
/// The in-memory value is authoritative for the session; storage is best
/// effort in both directions.
#[derive(Debug)]
pub struct ThemeState<S> {
    store: S,
    preference: ThemePreference,
}

impl<S: PreferenceStore> ThemeState<S> {
    /// Restore the persisted preference, defaulting to `System`
    pub fn load(store: S) -> Self {
        let preference = match store.read(THEME_KEY) {
            Ok(Some(raw)) => raw.parse::<ThemePreference>().unwrap_or_else(|err: ParseThemeError| {
                tracing::debug!(%err, "ignoring stored theme");
                ThemePreference::System
            }),
            Ok(None) => ThemePreference::System,
            Err(err) => {
                tracing::warn!(%err, "theme preference unreadable");
                ThemePreference::System
            }
        };
        Self { store, preference }
    }

    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    /// Switch preference and persist it; a failed write is logged, not returned
    pub fn set(&mut self, preference: ThemePreference) {
        self.preference = preference;
        tracing::debug!(theme = %preference, "theme changed");
        if let Err(err) = self.store.write(THEME_KEY, preference.as_str()) {
            tracing::warn!(%err, "theme preference not persisted");
        }
    }

    pub fn appearance(&self, prefers_dark: bool) -> Appearance {
        self.preference.resolve(prefers_dark)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::preference::{MemoryStore, StorageError};
    use rstest::rstest;

    struct BrokenStore;

    impl PreferenceStore for BrokenStore {
        fn read(&self, _key: &str) -> Result<Option<String>, StorageError> {
            Err(StorageError::Unavailable)
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), StorageError> {
            Err(StorageError::Unavailable)
        }
    }

    #[test]
    fn test_missing_value_defaults_to_system() {
        let state = ThemeState::load(MemoryStore::new());
        assert_eq!(state.preference(), ThemePreference::System);
    }

    #[rstest]
    #[case("light", ThemePreference::Light)]
    #[case("dark", ThemePreference::Dark)]
    #[case("system", ThemePreference::System)]
    #[case("Dark", ThemePreference::System)]
    #[case("", ThemePreference::System)]
    #[case("purple", ThemePreference::System)]
    fn test_load_stored_value(#[case] stored: &str, #[case] expected: ThemePreference) {
        let state = ThemeState::load(MemoryStore::with_value(THEME_KEY, stored));
        assert_eq!(state.preference(), expected);
    }

    #[test]
    fn test_unreadable_store_defaults_to_system() {
        let state = ThemeState::load(BrokenStore);
        assert_eq!(state.preference(), ThemePreference::System);
    }

    #[test]
    fn test_set_persists() {
        let store = MemoryStore::new();
        let mut state = ThemeState::load(&store);
        state.set(ThemePreference::Dark);
        assert_eq!(store.read(THEME_KEY).unwrap().as_deref(), Some("dark"));

        let reloaded = ThemeState::load(&store);
        assert_eq!(reloaded.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_failed_write_keeps_memory_state() {
        let mut state = ThemeState::load(BrokenStore);
        state.set(ThemePreference::Light);
        assert_eq!(state.preference(), ThemePreference::Light);
    }

    #[test]
    fn test_explicit_choice_ignores_ambient_signal() {
        let mut state = ThemeState::load(MemoryStore::new());
        state.set(ThemePreference::Dark);
        assert_eq!(state.appearance(false), Appearance::Dark);
        assert_eq!(state.appearance(true), Appearance::Dark);
        assert_eq!(state.preference(), ThemePreference::Dark);
    }

    #[test]
    fn test_system_follows_ambient_signal() {
        let mut state = ThemeState::load(MemoryStore::new());
        state.set(ThemePreference::System);
        assert_eq!(state.appearance(true), Appearance::Dark);
        // host flips to light, no new set() call
        assert_eq!(state.appearance(false), Appearance::Light);
        assert_eq!(state.preference(), ThemePreference::System);
    }

    #[test]
    fn test_string_forms_round_trip() {
        for preference in ThemePreference::ALL {
            assert_eq!(preference.as_str().parse::<ThemePreference>(), Ok(preference));
            assert_eq!(preference.to_string(), preference.as_str());
        }
        assert_eq!(
            "auto".parse::<ThemePreference>(),
            Err(ParseThemeError("auto".to_string()))
        );
    }

    #[test]
    fn test_serde_uses_lowercase_names() {
        for preference in ThemePreference::ALL {
            let json = serde_json::to_string(&preference).unwrap();
            assert_eq!(json, format!("\"{}\"", preference.as_str()));
            assert_eq!(serde_json::from_str::<ThemePreference>(&json).unwrap(), preference);
        }
        assert!(serde_json::from_str::<ThemePreference>("\"Dark\"").is_err());
    }
}

//! Application Context
//!
//! Catalog and theme state provided via Leptos Context API.

use std::sync::Arc;

use leptos::prelude::*;
use portfolio_core::{Appearance, Catalog, PreferenceStore, ThemePreference, ThemeState};

/// Read-only catalog shared by every component
pub type SharedCatalog = Arc<Catalog>;

pub fn use_catalog() -> SharedCatalog {
    expect_context::<SharedCatalog>()
}

/// Any preference store the theme can persist to
pub type SharedPreferenceStore = Arc<dyn PreferenceStore + Send + Sync>;

/// Theme signals provided via context
#[derive(Clone, Copy)]
pub struct ThemeContext {
    /// Stored preference (light / dark / system) - read
    pub preference: ReadSignal<ThemePreference>,
    /// Stored preference - write
    set_preference: WriteSignal<ThemePreference>,
    /// Appearance actually rendered
    pub appearance: Memo<Appearance>,
    /// Persisting state machine behind the signals
    state: StoredValue<ThemeState<SharedPreferenceStore>>,
}

impl ThemeContext {
    /// Restore the preference from `store` and track `prefers_dark` for `system`
    pub fn new<S>(store: S, prefers_dark: ReadSignal<bool>) -> Self
    where
        S: PreferenceStore + Send + Sync + 'static,
    {
        let state = ThemeState::load(Arc::new(store) as SharedPreferenceStore);
        let (preference, set_preference) = signal(state.preference());
        let appearance = Memo::new(move |_| preference.get().resolve(prefers_dark.get()));
        Self {
            preference,
            set_preference,
            appearance,
            state: StoredValue::new(state),
        }
    }

    /// Switch theme; persists before the signal fans out to the view
    pub fn set_theme(&self, preference: ThemePreference) {
        self.state.update_value(|state| state.set(preference));
        self.set_preference.set(preference);
    }
}

pub fn use_theme() -> ThemeContext {
    expect_context::<ThemeContext>()
}

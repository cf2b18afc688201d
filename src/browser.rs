//! Browser Glue
//!
//! localStorage-backed preferences, the prefers-color-scheme signal and a
//! few window helpers.

use leptos::prelude::*;
use portfolio_core::{Appearance, PreferenceStore, StorageError};
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;

const DARK_SCHEME_QUERY: &str = "(prefers-color-scheme: dark)";

// ========================
// Preference Storage
// ========================

/// [`PreferenceStore`] over `window.localStorage`.
///
/// The storage handle is looked up per call so the store itself stays
/// `Send + Sync` and can live in a `StoredValue`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalStorageStore;

impl LocalStorageStore {
    fn storage(&self) -> Result<web_sys::Storage, StorageError> {
        web_sys::window()
            .and_then(|win| win.local_storage().ok().flatten())
            .ok_or(StorageError::Unavailable)
    }
}

impl PreferenceStore for LocalStorageStore {
    fn read(&self, key: &str) -> Result<Option<String>, StorageError> {
        self.storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }

    fn write(&self, key: &str, value: &str) -> Result<(), StorageError> {
        self.storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            reason: format!("{:?}", e),
        })
    }
}

// ========================
// Ambient Color Scheme
// ========================

/// Live `prefers-color-scheme: dark` signal.
///
/// Seeded from `matchMedia` and kept current by its `change` events for the
/// lifetime of the page. Without `matchMedia` it stays `false`.
pub fn prefers_dark_signal() -> ReadSignal<bool> {
    let media = web_sys::window().and_then(|win| win.match_media(DARK_SCHEME_QUERY).ok().flatten());
    let (prefers_dark, set_prefers_dark) = signal(media.as_ref().map(|m| m.matches()).unwrap_or(false));

    if let Some(media) = media {
        let on_change = Closure::<dyn FnMut(web_sys::MediaQueryListEvent)>::new(
            move |ev: web_sys::MediaQueryListEvent| {
                tracing::debug!(dark = ev.matches(), "host color scheme changed");
                set_prefers_dark.set(ev.matches());
            },
        );
        if media
            .add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
            .is_err()
        {
            tracing::warn!("could not watch host color scheme");
        }
        on_change.forget();
    } else {
        tracing::debug!("matchMedia unavailable, assuming light host");
    }

    prefers_dark
}

// ========================
// Window Helpers
// ========================

/// Write the rendered appearance to `<html data-theme="...">`
pub fn apply_appearance(appearance: Appearance) {
    let root = web_sys::window()
        .and_then(|win| win.document())
        .and_then(|doc| doc.document_element());
    if let Some(root) = root {
        if let Err(err) = root.set_attribute("data-theme", appearance.as_str()) {
            tracing::warn!(?err, "could not apply theme to document");
        }
    }
}

/// Smooth-scroll the page back to the top
pub fn scroll_to_top() {
    if let Some(win) = web_sys::window() {
        let opts = web_sys::ScrollToOptions::new();
        opts.set_top(0.0);
        opts.set_behavior(web_sys::ScrollBehavior::Smooth);
        win.scroll_to_with_scroll_to_options(&opts);
    }
}

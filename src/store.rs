//! Gallery State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity: the filtered
//! grid only tracks the category and query fields, the modal only tracks
//! the selection.

use leptos::prelude::*;
use portfolio_core::{ItemId, Selection, ALL_CATEGORY};
use reactive_stores::Store;

/// Gallery UI state with field-level reactivity
#[derive(Clone, Debug, Store)]
pub struct GalleryState {
    /// Active category id (`all` = no filter)
    pub active_category: String,
    /// Search box contents
    pub search_query: String,
    /// Item open in the detail modal
    pub selection: Selection,
    /// Mobile sidebar drawer
    pub sidebar_open: bool,
}

impl Default for GalleryState {
    fn default() -> Self {
        Self {
            active_category: ALL_CATEGORY.to_string(),
            search_query: String::new(),
            selection: Selection::Empty,
            sidebar_open: false,
        }
    }
}

/// Type alias for the store
pub type GalleryStore = Store<GalleryState>;

/// Get the gallery store from context
pub fn use_gallery_store() -> GalleryStore {
    expect_context::<GalleryStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Activate a category from the sidebar (also closes the mobile drawer)
pub fn store_select_category(store: &GalleryStore, category_id: &str) {
    store.active_category().set(category_id.to_string());
    store.sidebar_open().set(false);
}

pub fn store_set_query(store: &GalleryStore, query: String) {
    store.search_query().set(query);
}

/// Reset both filters
pub fn store_clear_filters(store: &GalleryStore) {
    store.active_category().set(ALL_CATEGORY.to_string());
    store.search_query().set(String::new());
}

/// Open an item in the detail modal, replacing any open one
pub fn store_inspect(store: &GalleryStore, item_id: ItemId) {
    store.selection().update(|s| s.select(item_id));
}

pub fn store_close_detail(store: &GalleryStore) {
    store.selection().update(|s| s.clear());
}

pub fn store_toggle_sidebar(store: &GalleryStore) {
    store.sidebar_open().update(|open| *open = !*open);
}

//! Mobile Header Component
//!
//! Sticky top bar on narrow screens with the drawer toggle.

use leptos::prelude::*;

use crate::context::use_catalog;
use crate::store::{store_toggle_sidebar, use_gallery_store, GalleryStateStoreFields};

#[component]
pub fn MobileHeader() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_gallery_store();
    let title = catalog.site().short_title.clone();

    view! {
        <header class="mobile-header">
            <div class="mobile-brand">
                <div class="logo-mark small">"📦"</div>
                {title}
            </div>
            <button class="menu-btn" on:click=move |_| store_toggle_sidebar(&store)>
                {move || if store.sidebar_open().get() { "✕" } else { "☰" }}
            </button>
        </header>
    }
}

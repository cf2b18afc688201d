//! Art Portfolio App
//!
//! Root component: loads the catalog, provides gallery/theme context and
//! lays out sidebar, grid and detail modal.

use std::sync::Arc;

use leptos::prelude::*;
use portfolio_core::{filter_items, Catalog};
use reactive_stores::Store;

use crate::browser::{self, LocalStorageStore};
use crate::components::{DetailModal, GalleryGrid, GalleryHeader, MobileHeader, Sidebar};
use crate::context::{SharedCatalog, ThemeContext};
use crate::store::{GalleryState, GalleryStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    match Catalog::sample() {
        Ok(catalog) => view! { <Gallery catalog=catalog /> }.into_any(),
        Err(err) => {
            tracing::error!(%err, "catalog failed to load");
            view! { <CatalogUnavailable message=err.to_string() /> }.into_any()
        }
    }
}

#[component]
fn Gallery(catalog: Catalog) -> impl IntoView {
    let catalog: SharedCatalog = Arc::new(catalog);
    tracing::info!(
        items = catalog.items().len(),
        categories = catalog.categories().len(),
        "catalog loaded"
    );

    // State
    let store = Store::new(GalleryState::default());
    let theme = ThemeContext::new(LocalStorageStore, browser::prefers_dark_signal());

    // Provide context to all children
    provide_context(store);
    provide_context(catalog.clone());
    provide_context(theme);

    // Mirror the rendered appearance onto <html>
    Effect::new(move |_| browser::apply_appearance(theme.appearance.get()));

    // Only category and query are tracked, theme/selection changes never refilter
    let filtered = Memo::new(move |_| {
        let category = store.active_category().get();
        let query = store.search_query().get();
        let items = filter_items(catalog.items(), &category, &query);
        tracing::debug!(%category, %query, shown = items.len(), "filter recomputed");
        items
    });

    view! {
        <div class="app-layout">
            <MobileHeader />

            <div class="app-body">
                // Left: category sidebar
                <Sidebar />

                // Center: header, search and grid
                <main class="main-content">
                    <GalleryHeader />
                    <GalleryGrid filtered=filtered />
                </main>
            </div>

            // Lightbox, rendered only while something is selected
            <DetailModal />
        </div>
    }
}

#[component]
fn CatalogUnavailable(message: String) -> impl IntoView {
    view! {
        <div class="catalog-error">
            <h1>"Portfolio unavailable"</h1>
            <p>{message}</p>
        </div>
    }
}

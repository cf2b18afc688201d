//! Gallery Header Component
//!
//! Active category title and blurb, search box and removable filter chips.

use leptos::prelude::*;
use portfolio_core::ALL_CATEGORY;

use crate::context::use_catalog;
use crate::store::{store_select_category, store_set_query, use_gallery_store, GalleryStateStoreFields};

#[component]
fn SearchBox() -> impl IntoView {
    let store = use_gallery_store();

    view! {
        <div class="search-box">
            <span class="search-icon">"🔍"</span>
            <input
                type="text"
                placeholder="Search tags or titles..."
                prop:value=move || store.search_query().get()
                on:input=move |ev| store_set_query(&store, event_target_value(&ev))
            />
        </div>
    }
}

/// Chips for the filters currently narrowing the grid; click to drop one
#[component]
fn ActiveFilters() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_gallery_store();

    let category_chip = move || {
        store.active_category().with(|id| {
            (id != ALL_CATEGORY).then(|| catalog.label_for(id).to_string())
        })
    };
    let query_chip = move || {
        store.search_query().with(|query| (!query.is_empty()).then(|| query.clone()))
    };

    view! {
        <div class="active-filters">
            {move || category_chip().map(|label| view! {
                <button
                    class="chip chip-category"
                    on:click=move |_| store_select_category(&store, ALL_CATEGORY)
                >
                    {format!("Category: {}", label)}
                    <span class="chip-x">"✕"</span>
                </button>
            })}
            {move || query_chip().map(|query| view! {
                <button
                    class="chip chip-search"
                    on:click=move |_| store_set_query(&store, String::new())
                >
                    {format!("Search: \"{}\"", query)}
                    <span class="chip-x">"✕"</span>
                </button>
            })}
        </div>
    }
}

#[component]
pub fn GalleryHeader() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_gallery_store();

    let heading = {
        let catalog = catalog.clone();
        move || store.active_category().with(|id| catalog.label_for(id).to_string())
    };
    let blurb = move || store.active_category().with(|id| catalog.description_for(id).to_string());

    view! {
        <div class="gallery-header">
            <div class="gallery-header-row">
                <div>
                    <h2 class="gallery-title">{heading}</h2>
                    <p class="gallery-blurb">{blurb}</p>
                </div>
                <SearchBox />
            </div>
            <ActiveFilters />
        </div>
    }
}

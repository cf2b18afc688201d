use leptos::prelude::*;

use crate::store::{store_clear_filters, use_gallery_store};

/// Shown in place of the grid when nothing matches
#[component]
pub fn EmptyState() -> impl IntoView {
    let store = use_gallery_store();

    view! {
        <div class="empty-state">
            <span class="empty-icon">"📁"</span>
            <p class="empty-title">"No artifacts found."</p>
            <p class="empty-hint">"Try adjusting your filters or search terms."</p>
            <button class="empty-reset" on:click=move |_| store_clear_filters(&store)>
                "Clear all filters"
            </button>
        </div>
    }
}

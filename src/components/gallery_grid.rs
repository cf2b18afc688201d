//! Gallery Grid Component
//!
//! Card grid over the filtered items, or the empty state.

use leptos::prelude::*;
use portfolio_core::Item;

use crate::components::{ArtCard, EmptyState};

#[component]
pub fn GalleryGrid(filtered: Memo<Vec<Item>>) -> impl IntoView {
    view! {
        <Show
            when=move || filtered.with(|items| !items.is_empty())
            fallback=|| view! { <EmptyState /> }
        >
            <div class="gallery-grid">
                <For
                    each=move || filtered.get()
                    key=|item| item.id
                    children=move |item| {
                        view! { <ArtCard item=item /> }
                    }
                />
            </div>
        </Show>
    }
}

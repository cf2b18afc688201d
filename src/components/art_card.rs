//! Art Card Component
//!
//! Grid tile for one artwork. Clicking opens the detail modal.

use leptos::prelude::*;
use portfolio_core::{Item, FALLBACK_ICON};

use crate::context::use_catalog;
use crate::store::{store_inspect, use_gallery_store};

/// Tags shown on a card before truncating
const CARD_TAG_PREVIEW: usize = 3;

#[component]
pub fn ArtCard(item: Item) -> impl IntoView {
    let catalog = use_catalog();
    let store = use_gallery_store();

    let id = item.id;
    let icon = catalog
        .category_of(&item)
        .map(|c| c.icon.clone())
        .unwrap_or_else(|| FALLBACK_ICON.to_string());
    let tags = item
        .tags
        .iter()
        .take(CARD_TAG_PREVIEW)
        .map(|tag| view! { <span class="card-tag">{format!("#{}", tag)}</span> })
        .collect_view();

    view! {
        <div class="art-card" on:click=move |_| store_inspect(&store, id)>
            // Image placeholder
            <div class=format!("card-swatch swatch-{}", item.color_token)>
                <span class="card-icon">{icon}</span>
                <div class="card-overlay">
                    <span class="card-view">"View"</span>
                </div>
            </div>

            <div class="card-body">
                <div class="card-head">
                    <h3 class="card-title">{item.title}</h3>
                    <div class="card-likes">"♥ " {item.likes}</div>
                </div>
                <div class="card-tags">{tags}</div>
            </div>
        </div>
    }
}

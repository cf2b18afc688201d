//! Detail Modal Component
//!
//! Lightbox for the selected artwork. Renders nothing while the selection
//! is empty or points at an item the catalog no longer has.

use leptos::prelude::*;
use portfolio_core::{Item, FALLBACK_ICON};

use crate::components::Badge;
use crate::context::use_catalog;
use crate::store::{store_close_detail, use_gallery_store, GalleryStateStoreFields};

#[component]
fn DetailCard(item: Item) -> impl IntoView {
    let catalog = use_catalog();
    let store = use_gallery_store();

    let icon = catalog
        .category_of(&item)
        .map(|c| c.icon.clone())
        .unwrap_or_else(|| FALLBACK_ICON.to_string());
    let label = catalog.label_for(&item.category_id).to_string();
    let close = move |_: web_sys::MouseEvent| store_close_detail(&store);

    let tags = item
        .tags
        .iter()
        .map(|tag| view! {
            <div class="detail-tag">
                <span class="detail-tag-icon">"🏷"</span>
                {tag.clone()}
            </div>
        })
        .collect_view();

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                // Image section
                <div class=format!("modal-swatch swatch-{}", item.color_token)>
                    <span class="modal-icon">{icon}</span>
                    <button class="modal-close mobile" on:click=close>"✕"</button>
                </div>

                // Details section
                <div class="modal-details">
                    <div class="modal-top">
                        <Badge>{label}</Badge>
                        <button class="modal-close desktop" on:click=close>"✕"</button>
                    </div>

                    <h2 class="modal-title">{item.title}</h2>

                    <div class="modal-meta">
                        <span>{item.date.to_string()}</span>
                        <span>"•"</span>
                        <span class="modal-likes">"♥ " {item.likes}</span>
                    </div>

                    <p class="modal-description">{item.description}</p>

                    <div class="modal-tags">
                        <h4 class="modal-tags-label">"Tags"</h4>
                        <div class="modal-tag-list">{tags}</div>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[component]
pub fn DetailModal() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_gallery_store();

    let selected = move || store.selection().with(|selection| selection.resolve(&catalog).cloned());

    move || selected().map(|item| view! { <DetailCard item=item /> })
}

//! Sidebar Component
//!
//! Left column: logo, category library, theme switch and the commission
//! call-to-action. Slides in as a drawer on mobile.

use leptos::prelude::*;
use portfolio_core::{Category, SiteInfo};

use crate::browser;
use crate::components::ThemeToggle;
use crate::context::use_catalog;
use crate::store::{store_select_category, use_gallery_store, GalleryStateStoreFields};

/// One category row
#[component]
fn SidebarItem(category: Category) -> impl IntoView {
    let store = use_gallery_store();

    let id = category.id.clone();
    let is_active = Memo::new({
        let id = id.clone();
        move |_| store.active_category().with(|active| *active == id)
    });
    let accent = format!("accent-{}", category.color_token);

    let on_click = move |_: web_sys::MouseEvent| {
        tracing::debug!(category = %id, "category selected");
        store_select_category(&store, &id);
        browser::scroll_to_top();
    };

    view! {
        <button
            class=move || if is_active.get() { "sidebar-item active" } else { "sidebar-item" }
            on:click=on_click
        >
            <span class=move || if is_active.get() { format!("sidebar-icon {}", accent) } else { "sidebar-icon".to_string() }>
                {category.icon}
            </span>
            <span class="sidebar-label">{category.label}</span>
            <Show when=move || is_active.get()>
                <span class="sidebar-active-dot"></span>
            </Show>
        </button>
    }
}

/// Commission card at the bottom of the sidebar
#[component]
fn SidebarFooter(site: SiteInfo) -> impl IntoView {
    let cta = match site.contact_url {
        Some(url) => view! {
            <a class="contact-btn" href=url>{site.contact_label}</a>
        }.into_any(),
        None => view! {
            <button class="contact-btn">{site.contact_label}</button>
        }.into_any(),
    };

    view! {
        <div class="sidebar-footer">
            <div class="contact-card">
                <p class="contact-prompt">{site.contact_prompt}</p>
                {cta}
            </div>
        </div>
    }
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let catalog = use_catalog();
    let store = use_gallery_store();
    let site = catalog.site().clone();

    let items = catalog
        .categories()
        .iter()
        .cloned()
        .map(|category| view! { <SidebarItem category=category /> })
        .collect_view();

    view! {
        <aside class=move || if store.sidebar_open().get() { "sidebar open" } else { "sidebar" }>
            // Desktop logo
            <div class="sidebar-logo">
                <div class="logo-mark">"📦"</div>
                <div>
                    <h1 class="logo-title">{site.title.clone()}</h1>
                    <p class="logo-tagline">{site.tagline.clone()}</p>
                </div>
            </div>

            <nav class="sidebar-nav">
                <div class="sidebar-section-label">"Library"</div>
                {items}
            </nav>

            <ThemeToggle />

            <SidebarFooter site=site />
        </aside>
    }
}

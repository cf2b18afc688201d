//! Theme Toggle Component
//!
//! Three-way light / dark / system switch.

use leptos::prelude::*;
use portfolio_core::ThemePreference;

use crate::context::use_theme;

fn glyph_and_label(preference: ThemePreference) -> (&'static str, &'static str) {
    match preference {
        ThemePreference::Light => ("☀", "Light"),
        ThemePreference::Dark => ("☾", "Dark"),
        ThemePreference::System => ("◐", "System"),
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let theme = use_theme();

    view! {
        <div class="theme-toggle">
            {ThemePreference::ALL.into_iter().map(move |choice| {
                let (glyph, label) = glyph_and_label(choice);
                view! {
                    <button
                        class=move || if theme.preference.get() == choice { "theme-btn active" } else { "theme-btn" }
                        title=label
                        on:click=move |_| theme.set_theme(choice)
                    >
                        <span class="theme-glyph">{glyph}</span>
                        <span class="theme-label">{label}</span>
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

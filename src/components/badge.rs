use leptos::prelude::*;

/// Small uppercase pill label
#[component]
pub fn Badge(children: Children) -> impl IntoView {
    view! {
        <span class="badge">{children()}</span>
    }
}

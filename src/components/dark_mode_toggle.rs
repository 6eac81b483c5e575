//! Floating dark-mode toggle

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};
use crate::store::{store_toggle_dark_mode, use_app_store, AppStateStoreFields};

#[component]
pub fn DarkModeToggle() -> impl IntoView {
    let store = use_app_store();
    let dark = move || store.dark_mode().get();

    view! {
        <button
            class="dark-mode-toggle"
            title=move || if dark() { "Switch to light mode" } else { "Switch to dark mode" }
            on:click=move |_| store_toggle_dark_mode(&store)
        >
            {move || if dark() {
                view! { <IconGlyph icon=Icon::Sun /> }
            } else {
                view! { <IconGlyph icon=Icon::Moon /> }
            }}
        </button>
    }
}

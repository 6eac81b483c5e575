//! Navbar Component
//!
//! Document search, notification bell with unread badge, profile link.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::context::use_app_context;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::store::{store_unread_count, use_app_store};

#[component]
pub fn Navbar() -> impl IntoView {
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();
    let avatar = mock_data::team().first().map(|m| m.image_url).unwrap_or_default();

    // Enter jumps to the document list, which filters by the same text
    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        navigate("/documents", Default::default());
    };

    view! {
        <header class="navbar">
            <form class="navbar-search" on:submit=on_submit>
                <IconGlyph icon=Icon::Search class="search-icon" />
                <input
                    type="search"
                    placeholder="Search documents..."
                    prop:value=move || ctx.search.get()
                    on:input=move |ev| ctx.search.set(event_target_value(&ev))
                />
            </form>
            <div class="navbar-actions">
                <a href="/notifications" class="navbar-bell" title="View notifications">
                    <IconGlyph icon=Icon::Bell />
                    <Show when=move || store_unread_count(&store) != 0>
                        <span class="bell-badge">{move || store_unread_count(&store)}</span>
                    </Show>
                </a>
                <a href="/profile" class="navbar-avatar" title="Your profile">
                    <img src=avatar alt="" />
                </a>
            </div>
        </header>
    }
}

//! Sidebar Component
//!
//! Brand, main navigation and the "System" section. The active entry is the
//! one whose href equals the current path.

use leptos::prelude::*;
use leptos_router::hooks::use_location;

use crate::icon::{Icon, IconGlyph};
use crate::store::{store_unread_count, use_app_store};

/// (label, href, icon, shows unread badge)
type NavEntry = (&'static str, &'static str, Icon, bool);

pub const MAIN_NAV: &[NavEntry] = &[
    ("Dashboard", "/", Icon::Home, false),
    ("Upload", "/upload", Icon::Upload, false),
    ("Document Parsing", "/document-parsing", Icon::FileSearch, false),
    ("Document Validation", "/document-validation", Icon::CheckSquare, false),
    ("Proposal Generation", "/proposal-generation", Icon::FileOutput, false),
    ("Templates", "/templates", Icon::Template, false),
    ("Knowledge Store", "/knowledge-store", Icon::Database, false),
    ("InfinitiBit Editor", "/editor", Icon::Edit, false),
    ("File Explorer", "/file-explorer", Icon::FileText, false),
    ("Chat", "/chat", Icon::Chat, false),
];

pub const SYSTEM_NAV: &[NavEntry] = &[
    ("Team", "/team", Icon::Users, false),
    ("Notifications", "/notifications", Icon::Bell, true),
    ("Activity Log", "/activity", Icon::Activity, false),
    ("Profile", "/profile", Icon::User, false),
    ("Salesforce", "/salesforce", Icon::Cloud, false),
    ("Settings", "/settings", Icon::Settings, false),
    ("Help", "/help", Icon::Help, false),
];

#[component]
pub fn Sidebar() -> impl IntoView {
    view! {
        <aside class="sidebar">
            <div class="sidebar-brand">
                <IconGlyph icon=Icon::FileText class="brand-icon" />
                <span>"Bid Platform"</span>
            </div>
            <nav class="sidebar-nav">
                <NavList entries=MAIN_NAV />
                <div class="sidebar-section-title">"System"</div>
                <NavList entries=SYSTEM_NAV />
            </nav>
        </aside>
    }
}

#[component]
fn NavList(entries: &'static [NavEntry]) -> impl IntoView {
    let location = use_location();
    let store = use_app_store();

    view! {
        <ul class="nav-list">
            {entries
                .iter()
                .map(|&(label, href, icon, badge)| {
                    let is_active = move || location.pathname.get() == href;
                    view! {
                        <li>
                            <a href=href class="nav-link" class:active=is_active>
                                <IconGlyph icon=icon />
                                <span class="nav-label">{label}</span>
                                {badge.then(|| view! {
                                    <Show when=move || store_unread_count(&store) != 0>
                                        <span class="nav-badge">{move || store_unread_count(&store)}</span>
                                    </Show>
                                })}
                            </a>
                        </li>
                    }
                })
                .collect_view()}
        </ul>
    }
}

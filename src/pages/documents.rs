//! Documents page
//!
//! Full document list, filtered by the navbar search text.

use leptos::prelude::*;

use crate::context::use_app_context;
use crate::format::{format_date, pluralize};
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::DocumentRecord;

#[component]
pub fn DocumentsPage() -> impl IntoView {
    let ctx = use_app_context();
    let all = StoredValue::new(mock_data::documents());

    let visible = Memo::new(move |_| {
        let query = ctx.search.get();
        all.with_value(|docs| docs.iter().filter(|d| d.matches(&query)).cloned().collect::<Vec<_>>())
    });

    view! {
        <div class="page-header">
            <div>
                <h1>"Documents"</h1>
                <p class="muted">{move || pluralize(visible.with(|v| v.len()), "document", "documents")}</p>
            </div>
            <a href="/upload" class="btn primary">
                <IconGlyph icon=Icon::Upload />
                "Upload"
            </a>
        </div>

        <div class="search-field">
            <IconGlyph icon=Icon::Search />
            <input
                type="text"
                placeholder="Search documents..."
                prop:value=move || ctx.search.get()
                on:input=move |ev| ctx.search.set(event_target_value(&ev))
            />
        </div>

        <section class="card">
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! { <p class="empty-state">"No documents match your search."</p> }
            >
                <ul class="row-list">
                    <For
                        each=move || visible.get()
                        key=|doc| doc.id.clone()
                        children=|doc| view! { <DocumentRow doc=doc /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn DocumentRow(doc: DocumentRecord) -> impl IntoView {
    view! {
        <li class="document-row">
            <IconGlyph icon=Icon::FileText class="doc-icon" />
            <div class="document-main">
                <p class="row-title">
                    {doc.title.clone()}
                    <span class=doc.status.css_class()>{doc.status.label()}</span>
                </p>
                <p class="muted small">
                    {format!(
                        "{} · {} · Updated {}",
                        doc.kind.label(),
                        doc.creator.name,
                        format_date(doc.updated_at.date_naive())
                    )}
                </p>
                <div class="progress">
                    <div class="progress-bar" style=format!("width: {}%", doc.progress)></div>
                </div>
            </div>
            <span class="muted small">{doc.file_size.clone()}</span>
        </li>
    }
}

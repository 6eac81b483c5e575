//! Knowledge Document Card Component
//!
//! Card with relevance badge and an action menu (View, Chat, Download,
//! Delete). Delete goes through an inline confirmation.

use leptos::prelude::*;

use crate::components::DeleteConfirmButton;
use crate::config::use_config;
use crate::error::DownloadError;
use crate::format::{format_date, percent, pluralize};
use crate::icon::{Icon, IconGlyph};
use crate::models::KnowledgeDocument;

const DELETE_PROMPT: &str =
    "Delete this document? It will also be removed from the RAG knowledge base.";

#[component]
pub fn DocumentCard(
    document: KnowledgeDocument,
    #[prop(into)] on_chat: Callback<KnowledgeDocument>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    let thresholds = use_config().relevance;
    let (show_menu, set_show_menu) = signal(false);

    let id = document.id;
    let low = document.relevance.is_some_and(|r| thresholds.is_low(r));
    let badge = document.relevance.map(|score| {
        view! {
            <span class=format!("badge {}", thresholds.band(score).css_class())>
                {format!("Relevance Score: {}%", percent(score))}
            </span>
        }
    });
    let chat_doc = document.clone();

    view! {
        <div class="card document-card">
            <div class="card-header">
                <div class="doc-heading">
                    <IconGlyph icon=Icon::Database class="doc-icon" />
                    <div>
                        <h3>
                            {document.title.clone()}
                            {low.then(|| view! { <IconGlyph icon=Icon::Warning class="low-relevance" /> })}
                        </h3>
                        <p class="muted">{document.category.label()}</p>
                        {document.description.clone().map(|d| view! { <p class="muted clamp">{d}</p> })}
                    </div>
                </div>
                <div class="menu-anchor">
                    <button
                        type="button"
                        class="icon-btn"
                        on:click=move |_| set_show_menu.update(|v| *v = !*v)
                    >
                        <IconGlyph icon=Icon::Menu />
                    </button>
                    <Show when=move || show_menu.get()>
                        <div class="dropdown">
                            <button
                                type="button"
                                on:click=move |_| {
                                    tracing::info!(document = id, "view knowledge document");
                                    set_show_menu.set(false);
                                }
                            >
                                <IconGlyph icon=Icon::Eye />
                                "View"
                            </button>
                            <button
                                type="button"
                                on:click={
                                    let doc = chat_doc.clone();
                                    move |_| on_chat.run(doc.clone())
                                }
                            >
                                <IconGlyph icon=Icon::Chat />
                                "Chat"
                            </button>
                            <button
                                type="button"
                                on:click=move |_| {
                                    // Mock entries carry metadata only
                                    tracing::warn!(document = id, "{}", DownloadError::NoDocument);
                                    set_show_menu.set(false);
                                }
                            >
                                <IconGlyph icon=Icon::Download />
                                "Download"
                            </button>
                            <DeleteConfirmButton
                                button_class="danger"
                                prompt=DELETE_PROMPT
                                on_confirm=move |_: ()| on_delete.run(id)
                            />
                        </div>
                    </Show>
                </div>
            </div>
            {badge}
            <div class="card-footer muted">
                <span>
                    <IconGlyph icon=Icon::FileText />
                    {format!("Used {}", pluralize(document.usage_count as usize, "time", "times"))}
                </span>
                <span>{format!("Last used {}", format_date(document.last_used))}</span>
            </div>
        </div>
    }
}

//! Knowledge Store page

use chrono::{NaiveDate, Utc};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::{DocumentCard, KnowledgeUpload, UploadModal};
use crate::config::use_config;
use crate::context::{use_app_context, Handoff};
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::{next_knowledge_id, present_categories, ChatDocument, KnowledgeCategory, KnowledgeDocument, KnowledgeQuery};
use crate::notifications::{NewNotification, NotificationCategory};
use crate::store::{store_add_notification, use_app_store};

/// One new entry per uploaded file, numbered after the current maximum
fn documents_from_upload(
    existing: &[KnowledgeDocument],
    upload: &KnowledgeUpload,
    today: NaiveDate,
    mut score: impl FnMut() -> f64,
) -> Vec<KnowledgeDocument> {
    let first = next_knowledge_id(existing);
    upload
        .files
        .iter()
        .enumerate()
        .map(|(i, file)| KnowledgeDocument {
            id: first + i as u32,
            title: file.name.clone(),
            category: upload.category,
            last_used: today,
            usage_count: 0,
            relevance: Some(score()),
            description: Some(upload.description.clone()),
        })
        .collect()
}

fn low_relevance_message(count: usize) -> String {
    if count == 1 {
        "1 document in your knowledge store has a low relevance score. Consider reviewing or updating it to maintain knowledge base quality.".to_string()
    } else {
        format!(
            "{} documents in your knowledge store have low relevance scores. Consider reviewing or updating them to maintain knowledge base quality.",
            count
        )
    }
}

#[component]
pub fn KnowledgeStorePage() -> impl IntoView {
    let thresholds = use_config().relevance;
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let documents = RwSignal::new(mock_data::knowledge_documents());
    let query = RwSignal::new(KnowledgeQuery::default());
    let show_upload = RwSignal::new(false);
    let show_filters = RwSignal::new(false);

    let visible = move || query.with(|q| documents.with(|docs| docs.iter().filter(|d| q.matches(d)).cloned().collect::<Vec<_>>()));
    let categories = move || documents.with(|docs| present_categories(docs));
    let low_count = Memo::new(move |_| {
        documents.with(|docs| {
            docs.iter()
                .filter(|d| d.relevance.is_some_and(|r| thresholds.is_low(r)))
                .count()
        })
    });

    let on_upload = Callback::new(move |upload: KnowledgeUpload| {
        let today = Utc::now().date_naive();
        let added = documents.with_untracked(|docs| documents_from_upload(docs, &upload, today, js_sys::Math::random));
        tracing::info!(count = added.len(), category = upload.category.value(), "knowledge documents added");
        store_add_notification(
            &store,
            NewNotification::new(
                NotificationCategory::Document,
                "Knowledge Store Updated",
                format!("{} document(s) added to {}.", added.len(), upload.category.label()),
            )
            .with_action_url("/knowledge-store"),
        );
        documents.update(|docs| docs.extend(added));
    });

    let on_delete = Callback::new(move |id: u32| {
        tracing::info!(id, "knowledge document deleted");
        documents.update(|docs| docs.retain(|d| d.id != id));
    });

    let on_chat = Callback::new(move |doc: KnowledgeDocument| {
        ctx.hand_off(Handoff::ChatDocument(ChatDocument { id: doc.id, title: doc.title }));
        navigate("/chat", Default::default());
    });

    view! {
        <div class="page-header">
            <div>
                <h1>"Knowledge Store"</h1>
                <p class="muted">"Access and manage your organization's document templates, examples, and guidelines"</p>
            </div>
            <button type="button" class="btn primary" on:click=move |_| show_upload.set(true)>
                <IconGlyph icon=Icon::Plus />
                "Add Documents"
            </button>
        </div>

        <Show when=move || { low_count.get() > 0 }>
            <div class="alert warning">
                <IconGlyph icon=Icon::Warning />
                <div>
                    <h3>"Low Relevance Documents"</h3>
                    <p>{move || low_relevance_message(low_count.get())}</p>
                </div>
            </div>
        </Show>

        <div class="filter-row">
            <div class="search-field">
                <IconGlyph icon=Icon::Search />
                <input
                    type="text"
                    placeholder="Search knowledge base..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
            </div>
            <select on:change=move |ev| query.update(|q| q.category = KnowledgeCategory::from_value(&event_target_value(&ev)))>
                <option value="">"All Categories"</option>
                {move || categories()
                    .into_iter()
                    .map(|c| view! {
                        <option value=c.value() selected=move || query.with(|q| q.category == Some(c))>
                            {c.label()}
                        </option>
                    })
                    .collect_view()}
            </select>
            <button type="button" class="btn" on:click=move |_| show_filters.update(|v| *v = !*v)>
                <IconGlyph icon=Icon::Filter />
                "Filters"
            </button>
        </div>

        <Show when=move || show_filters.get()>
            <div class="card muted">"Additional filters coming soon..."</div>
        </Show>

        <div class="card-grid">
            <For
                each=visible
                key=|d| d.id
                children=move |doc| view! { <DocumentCard document=doc on_chat=on_chat on_delete=on_delete /> }
            />
        </div>

        <Show when=move || show_upload.get()>
            <UploadModal on_close=move |_: ()| show_upload.set(false) on_upload=on_upload />
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::PickedFile;

    fn picked(name: &str) -> PickedFile {
        PickedFile { name: name.to_string(), size: 1024, mime: "application/pdf".to_string() }
    }

    #[test]
    fn test_upload_creates_numbered_documents() {
        let existing = mock_data::knowledge_documents();
        let upload = KnowledgeUpload {
            files: vec![picked("a.pdf"), picked("b.docx")],
            category: KnowledgeCategory::Guideline,
            description: "Fresh guidance".to_string(),
        };
        let today = NaiveDate::from_ymd_opt(2024, 3, 20).unwrap_or_default();
        let mut scores = [0.9, 0.3].into_iter();
        let added = documents_from_upload(&existing, &upload, today, || scores.next().unwrap_or(0.0));

        let first = next_knowledge_id(&existing);
        assert_eq!(added.iter().map(|d| d.id).collect::<Vec<_>>(), vec![first, first + 1]);
        assert_eq!(added[0].title, "a.pdf");
        assert_eq!(added[1].relevance, Some(0.3));
        assert!(added.iter().all(|d| d.usage_count == 0 && d.last_used == today));
        assert_eq!(added[0].description.as_deref(), Some("Fresh guidance"));
    }

    #[test]
    fn test_low_relevance_message_plural() {
        assert!(low_relevance_message(1).starts_with("1 document in your knowledge store has"));
        assert!(low_relevance_message(3).starts_with("3 documents in your knowledge store have"));
    }
}

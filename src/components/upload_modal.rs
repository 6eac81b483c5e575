//! Knowledge Store Upload Modal

use leptos::prelude::*;

use crate::components::{FileDropZone, PickedFile};
use crate::config::use_config;
use crate::format::format_file_size;
use crate::icon::{Icon, IconGlyph};
use crate::models::KnowledgeCategory;
use crate::validation::{check_knowledge_upload, KNOWLEDGE_RULE};

/// Files accepted by the modal plus the chosen metadata
#[derive(Debug, Clone, PartialEq)]
pub struct KnowledgeUpload {
    pub files: Vec<PickedFile>,
    pub category: KnowledgeCategory,
    pub description: String,
}

#[component]
pub fn UploadModal(
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] on_upload: Callback<KnowledgeUpload>,
) -> impl IntoView {
    let max_bytes = use_config().upload.max_file_bytes;

    let (files, set_files) = signal(Vec::<PickedFile>::new());
    let (category, set_category) = signal(None::<KnowledgeCategory>);
    let (description, set_description) = signal(String::new());
    let (warning, set_warning) = signal(None::<String>);

    let on_files = Callback::new(move |picked: Vec<PickedFile>| {
        let mut rejected = None;
        let accepted: Vec<PickedFile> = picked
            .into_iter()
            .filter(|f| match KNOWLEDGE_RULE.check(&f.name, f.size, max_bytes) {
                Ok(()) => true,
                Err(e) => {
                    rejected = Some(e.to_string());
                    false
                }
            })
            .collect();
        set_files.update(|list| list.extend(accepted));
        set_warning.set(rejected);
    });

    let submit = move |_| {
        let desc = description.get_untracked();
        let count = files.with_untracked(|f| f.len());
        match check_knowledge_upload(category.get_untracked(), &desc, count) {
            Ok(category) => {
                on_upload.run(KnowledgeUpload {
                    files: files.get_untracked(),
                    category,
                    description: desc.trim().to_string(),
                });
                on_close.run(());
            }
            Err(e) => set_warning.set(Some(e.to_string())),
        }
    };

    view! {
        <div class="modal-backdrop">
            <div class="modal">
                <div class="modal-header">
                    <h3>"Upload to Knowledge Store"</h3>
                    <button type="button" class="icon-btn" on:click=move |_| on_close.run(())>
                        <IconGlyph icon=Icon::Cross />
                    </button>
                </div>

                {move || warning.get().map(|w| view! {
                    <div class="alert warning">
                        <IconGlyph icon=Icon::Warning />
                        <span>{w}</span>
                    </div>
                })}

                <label class="field">
                    <span>"Category"</span>
                    <select on:change=move |ev| set_category.set(KnowledgeCategory::from_value(&event_target_value(&ev)))>
                        <option value="">"Select a category"</option>
                        {KnowledgeCategory::UPLOADABLE
                            .into_iter()
                            .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>

                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        placeholder="Provide a brief description of the document(s)..."
                        prop:value=move || description.get()
                        on:input=move |ev| set_description.set(event_target_value(&ev))
                    ></textarea>
                </label>

                <FileDropZone
                    accept=KNOWLEDGE_RULE.accept()
                    hint=format!("PDF, DOCX up to {} each", format_file_size(max_bytes))
                    on_files=on_files
                />

                <Show when=move || files.with(|f| !f.is_empty())>
                    <h4>"Selected Files:"</h4>
                    <ul class="file-list">
                        {move || files
                            .get()
                            .into_iter()
                            .enumerate()
                            .map(|(i, f)| view! {
                                <li>
                                    <span>{f.name}</span>
                                    <button
                                        type="button"
                                        class="icon-btn danger"
                                        on:click=move |_| set_files.update(|list| {
                                            if i < list.len() {
                                                list.remove(i);
                                            }
                                        })
                                    >
                                        <IconGlyph icon=Icon::Cross />
                                    </button>
                                </li>
                            })
                            .collect_view()}
                    </ul>
                </Show>

                <div class="modal-actions">
                    <button type="button" class="btn" on:click=move |_| on_close.run(())>"Cancel"</button>
                    <button type="button" class="btn primary" on:click=submit>"Upload"</button>
                </div>
            </div>
        </div>
    }
}

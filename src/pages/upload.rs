//! Upload page
//!
//! Three-step flow: pick files, add project info, hand off to parsing.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::{AdditionalInfoForm, FileDropZone, PickedFile};
use crate::config::use_config;
use crate::context::{use_app_context, Handoff};
use crate::error::ValidationError;
use crate::format::format_file_size;
use crate::icon::{Icon, IconGlyph};
use crate::models::{AdditionalInfo, UploadCategory, UploadPayload, UploadStatus, UploadedFile};
use crate::validation::UPLOAD_RULE;
use crate::workflow::{delay, CancelToken};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum UploadStep {
    Upload,
    Info,
}

/// Files that can move on to parsing
fn ready_files(files: &[UploadedFile]) -> Vec<UploadedFile> {
    files
        .iter()
        .filter(|f| !matches!(f.status, UploadStatus::Error(_)))
        .cloned()
        .collect()
}

/// Rows are keyed by id alone; progress and category update in place
fn row_key(file: &UploadedFile) -> String {
    file.id.clone()
}

#[component]
pub fn UploadPage() -> impl IntoView {
    let config = use_config();
    let ctx = use_app_context();
    let navigate = use_navigate();

    let files = RwSignal::new(Vec::<UploadedFile>::new());
    let info = RwSignal::new(AdditionalInfo::default());
    let step = RwSignal::new(UploadStep::Upload);
    let warning = RwSignal::new(None::<String>);

    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    let max_bytes = config.upload.max_file_bytes;
    let tick_ms = config.simulation.upload_tick_ms;
    let tick_step = config.simulation.upload_step_percent;

    let on_files = Callback::new(move |picked: Vec<PickedFile>| {
        let mut rejected = None;
        for file in picked {
            let mut entry = UploadedFile::new(uuid::Uuid::new_v4().to_string(), file.name, file.size, file.mime);
            if let Err(e) = UPLOAD_RULE.check(&entry.name, entry.size, max_bytes) {
                let msg = e.to_string();
                entry.status = UploadStatus::Error(msg.clone());
                rejected = Some(msg);
                files.update(|list| list.push(entry));
                continue;
            }

            let id = entry.id.clone();
            files.update(|list| list.push(entry));
            let token = token.clone();
            spawn_local(async move {
                loop {
                    if delay(tick_ms, &token).await.is_err() {
                        break;
                    }
                    // Row removed or page gone: stop ticking
                    let done = files
                        .try_update(|list| list.iter_mut().find(|f| f.id == id).map(|f| f.tick(tick_step)))
                        .flatten()
                        .unwrap_or(true);
                    if done {
                        break;
                    }
                }
            });
        }
        warning.set(rejected);
    });

    let next = move |_| {
        if files.with(|f| ready_files(f).is_empty()) {
            warning.set(Some(ValidationError::NoFiles.to_string()));
            return;
        }
        warning.set(None);
        step.set(UploadStep::Info);
    };

    let submit = move |_| {
        let payload = UploadPayload {
            files: files.with_untracked(|f| ready_files(f)),
            info: info.get_untracked(),
        };
        tracing::info!(files = payload.files.len(), "upload submitted");
        ctx.hand_off(Handoff::Upload(payload));
        navigate("/document-parsing", Default::default());
    };

    let title = move || match step.get() {
        UploadStep::Upload => "Upload Documents",
        UploadStep::Info => "Additional Information",
    };
    let subtitle = move || match step.get() {
        UploadStep::Upload => "Upload your RFPs, RFQs, or supporting documents. Accepted formats: PDF, DOC, DOCX",
        UploadStep::Info => "Provide additional details about your project",
    };

    view! {
        <div class="page-header">
            <div>
                <h1>{title}</h1>
                <p class="muted">{subtitle}</p>
            </div>
        </div>

        <ol class="stepper">
            <li class:active=move || step.get() == UploadStep::Upload>"Upload"</li>
            <li class:active=move || step.get() == UploadStep::Info>"Info"</li>
            <li>"Parsing"</li>
        </ol>

        {move || warning.get().map(|w| view! {
            <div class="alert warning">
                <IconGlyph icon=Icon::Warning />
                <span>{w}</span>
            </div>
        })}

        <Show
            when=move || step.get() == UploadStep::Upload
            fallback=move || view! {
                <AdditionalInfoForm info=info />
                <div class="form-actions">
                    <button type="button" class="btn" on:click=move |_| step.set(UploadStep::Upload)>"Back"</button>
                    <button type="button" class="btn primary" on:click=submit.clone()>
                        "Start Parsing"
                        <IconGlyph icon=Icon::ChevronRight />
                    </button>
                </div>
            }
        >
            <FileDropZone
                accept=UPLOAD_RULE.accept()
                hint=format!("PDF, DOC, DOCX up to {}", format_file_size(max_bytes))
                on_files=on_files
            />
            <Show when=move || files.with(|f| !f.is_empty())>
                <ul class="card upload-list">
                    <For
                        each=move || files.get()
                        key=row_key
                        children=move |f| view! { <UploadRow file=f files=files /> }
                    />
                </ul>
                <div class="form-actions">
                    <button type="button" class="btn" on:click=move |_| files.set(Vec::new())>"Clear all"</button>
                    <button type="button" class="btn primary" on:click=next>
                        "Next step"
                        <IconGlyph icon=Icon::ChevronRight />
                    </button>
                </div>
            </Show>
        </Show>
    }
}

#[component]
fn UploadRow(file: UploadedFile, files: RwSignal<Vec<UploadedFile>>) -> impl IntoView {
    let id = StoredValue::new(file.id.clone());
    let current = Memo::new(move |_| {
        id.with_value(|id| files.with(|list| list.iter().find(|f| &f.id == id).cloned()))
    });
    let progress = move || current.with(|f| f.as_ref().map_or(0, |f| f.progress));
    // Changes only on status transitions, not on every progress tick
    let status = Memo::new(move |_| current.with(|f| f.as_ref().map(|f| f.status.clone())));

    let set_category = move |ev: web_sys::Event| {
        let category = UploadCategory::from_value(&event_target_value(&ev));
        id.with_value(|id| {
            files.update(|list| {
                if let Some(f) = list.iter_mut().find(|f| &f.id == id) {
                    f.category = category;
                }
            })
        });
    };
    let remove = move |_| id.with_value(|id| files.update(|list| list.retain(|f| &f.id != id)));

    let status_view = move || match status.get() {
        Some(UploadStatus::Uploading) => view! {
            <div class="upload-progress">
                <div class="progress">
                    <div class="progress-bar" style=move || format!("width: {}%", progress())></div>
                </div>
                <span class="muted small">{move || format!("{}%", progress())}</span>
            </div>
        }
        .into_any(),
        Some(UploadStatus::Success) => view! { <IconGlyph icon=Icon::Check class="ok" /> }.into_any(),
        Some(UploadStatus::Error(msg)) => view! {
            <span class="field-error" title=msg.clone()>
                <IconGlyph icon=Icon::Alert />
            </span>
            <p class="field-error">{msg}</p>
        }
        .into_any(),
        None => ().into_any(),
    };

    view! {
        <li class="upload-row">
            <IconGlyph icon=Icon::FileText />
            <div class="upload-main">
                <p class="row-title">{file.name}</p>
                <p class="muted small">{format_file_size(file.size)}</p>
                <select
                    prop:value=move || current.with(|f| f.as_ref().map_or(file.category, |f| f.category).value())
                    on:change=set_category
                >
                    {UploadCategory::ALL
                        .into_iter()
                        .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                        .collect_view()}
                </select>
            </div>
            {status_view}
            <button type="button" class="icon-btn" on:click=remove>
                <IconGlyph icon=Icon::Cross />
            </button>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejected_files_do_not_move_on() {
        let ok = UploadedFile::new("1".into(), "rfp.pdf".into(), 10, "application/pdf".into());
        let mut bad = UploadedFile::new("2".into(), "notes.txt".into(), 10, "text/plain".into());
        bad.status = UploadStatus::Error("nope".into());
        let ready = ready_files(&[ok, bad]);
        assert_eq!(ready.len(), 1);
        assert_eq!(ready[0].id, "1");
    }

    #[test]
    fn test_row_key_is_stable_while_uploading() {
        let mut file = UploadedFile::new("7".into(), "rfp.pdf".into(), 10, "application/pdf".into());
        let before = row_key(&file);
        file.tick(20);
        file.category = UploadCategory::Rfq;
        assert_eq!(row_key(&file), before);

        let keys: std::collections::HashSet<(String, UploadCategory)> =
            UploadCategory::ALL.into_iter().map(|c| (before.clone(), c)).collect();
        assert_eq!(keys.len(), UploadCategory::ALL.len());
    }
}

//! Document Validation page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{ValidationReferences, ValidationReport};
use crate::config::use_config;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::{Severity, StandardSelection, ValidationItem};
use crate::notifications::{NewNotification, NotificationCategory};
use crate::store::{store_add_notification, use_app_store};
use crate::workflow::{delay, CancelToken};

/// Completion notice: success when nothing failed outright
fn completion_notice(document: &str, items: &[ValidationItem]) -> NewNotification {
    let errors = items.iter().filter(|i| i.severity == Severity::Error).count();
    let notice = if errors == 0 {
        NewNotification::new(
            NotificationCategory::Success,
            "Document Validation Complete",
            format!("{} passed validation with no errors.", document),
        )
    } else {
        NewNotification::new(
            NotificationCategory::Warning,
            "Validation Issues Found",
            format!("{} has {} validation error(s) to review.", document, errors),
        )
    };
    notice.with_action_url("/document-validation")
}

#[component]
pub fn DocumentValidationPage() -> impl IntoView {
    let config = use_config();
    let store = use_app_store();

    let documents = StoredValue::new(mock_data::validation_documents());
    let standards = StoredValue::new(mock_data::validation_standards());

    let selected = RwSignal::new(None::<&'static str>);
    let selection = RwSignal::new(StandardSelection::mandatory_only(&standards.get_value()));
    let results = RwSignal::new(None::<Vec<ValidationItem>>);
    let validating = RwSignal::new(false);

    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }
    let wait_ms = config.simulation.validation_ms;

    let select_document = move |ev: web_sys::Event| {
        let value = event_target_value(&ev);
        let id = documents.with_value(|docs| docs.iter().find(|d| d.id == value).map(|d| d.id));
        selected.set(id);
        results.set(None);
    };

    let toggle_standard = Callback::new(move |id: &'static str| {
        standards.with_value(|all| selection.update(|s| s.toggle(all, id)));
    });

    let validate = move |_| {
        let Some(doc_id) = selected.get_untracked() else {
            return;
        };
        let name = documents.with_value(|docs| docs.iter().find(|d| d.id == doc_id).map(|d| d.name).unwrap_or(doc_id));
        let checked = selection.with_untracked(|s| s.len());
        validating.set(true);
        let token = token.clone();
        spawn_local(async move {
            if delay(wait_ms, &token).await.is_err() {
                return;
            }
            let items = mock_data::validation_results(doc_id);
            tracing::info!(document = doc_id, standards = checked, items = items.len(), "validation finished");
            store_add_notification(&store, completion_notice(name, &items));
            results.try_set(Some(items));
            validating.try_set(false);
        });
    };

    let details = move || {
        let id = selected.get()?;
        documents.with_value(|docs| docs.iter().find(|d| d.id == id).cloned())
    };

    view! {
        <div class="page-header">
            <div>
                <h1>"Document Validation"</h1>
                <p class="muted">"Validate your documents against standard requirements and best practices"</p>
            </div>
        </div>

        <div class="validation-layout">
            <div class="validation-main">
                <section class="card">
                    <div class="select-row">
                        <label class="field">
                            <span>"Select Document"</span>
                            <select on:change=select_document>
                                <option value="">"Choose a document"</option>
                                {documents
                                    .get_value()
                                    .into_iter()
                                    .map(|d| view! { <option value=d.id>{d.name}</option> })
                                    .collect_view()}
                            </select>
                        </label>
                        <button
                            type="button"
                            class="btn primary"
                            disabled=move || selected.get().is_none() || validating.get()
                            on:click=validate
                        >
                            <IconGlyph icon=Icon::CheckSquare />
                            {move || if validating.get() { "Validating..." } else { "Validate Document" }}
                        </button>
                    </div>
                    {move || details().map(|doc| view! {
                        <div class="document-details">
                            <h3>"Selected Document Details"</h3>
                            <dl>
                                <dt>"File Name"</dt><dd>{doc.name}</dd>
                                <dt>"File Type"</dt><dd>{doc.file_type}</dd>
                                <dt>"Upload Date"</dt><dd>{doc.upload_date}</dd>
                                <dt>"File Size"</dt><dd>{doc.size}</dd>
                            </dl>
                        </div>
                    })}
                </section>

                {move || results.get().map(|items| view! {
                    <section class="card">
                        <h2>"Validation Results"</h2>
                        <ValidationReport items=items />
                    </section>
                })}
            </div>

            <ValidationReferences
                standards=standards.get_value()
                selection=selection
                on_toggle=toggle_standard
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_notice_category() {
        let with_errors = mock_data::validation_results("1");
        assert!(with_errors.iter().any(|i| i.severity == Severity::Error));
        let notice = completion_notice("RFP.pdf", &with_errors);
        assert_eq!(notice.category, NotificationCategory::Warning);

        let clean: Vec<ValidationItem> = with_errors
            .into_iter()
            .filter(|i| i.severity != Severity::Error)
            .collect();
        let notice = completion_notice("RFP.pdf", &clean);
        assert_eq!(notice.category, NotificationCategory::Success);
        assert_eq!(notice.action_url.as_deref(), Some("/document-validation"));
    }
}

//! Document Parsing page
//!
//! Runs the four analysis steps against the uploaded documents, then offers
//! to continue to proposal generation with the results.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;

use crate::components::ParsingProgress;
use crate::config::use_config;
use crate::context::{use_app_context, Handoff};
use crate::error::TaskError;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::{ParseOutcome, ParsedPayload, ParsedProject};
use crate::notifications::{NewNotification, NotificationCategory};
use crate::store::{store_add_notification, use_app_store};
use crate::workflow::{run_pipeline, CancelToken, StepPipeline, StepTiming};

fn collect_results(pipeline: &StepPipeline<ParseOutcome>) -> ParsedProject {
    ParsedProject::from_outcomes(pipeline.steps().iter().filter_map(|s| s.result.as_ref()))
}

#[component]
pub fn DocumentParsingPage() -> impl IntoView {
    let config = use_config();
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let upload = StoredValue::new(ctx.take_upload());
    let pipeline = RwSignal::new(StepPipeline::new(mock_data::parsing_steps()));
    let failure = RwSignal::new(None::<TaskError>);
    let finished = Memo::new(move |_| pipeline.with(|p| p.succeeded()));

    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    let timing = StepTiming {
        gap_ms: config.simulation.parse_step_gap_ms(),
        duration_ms: config.simulation.parse_step_duration_ms,
    };
    let file_count = upload.with_value(|u| u.as_ref().map_or(0, |p| p.files.len()));
    tracing::info!(files = file_count, "document parsing started");

    spawn_local(async move {
        let ids = pipeline.with_untracked(|p| p.ids());
        let emit = move |event| {
            let applied = pipeline.try_update(|p| p.apply(event));
            if let Some(Err(e)) = applied {
                tracing::warn!("parsing step rejected: {}", e);
            }
        };
        match run_pipeline(ids, timing, token, mock_data::parse_step_result, emit).await {
            Ok(()) => {
                store_add_notification(
                    &store,
                    NewNotification::new(
                        NotificationCategory::Document,
                        "Document Analysis Complete",
                        "Your documents have been analyzed and are ready for proposal generation.",
                    )
                    .with_action_url("/document-parsing"),
                );
            }
            Err(TaskError::Cancelled) => {
                tracing::debug!("document parsing cancelled");
            }
            Err(e) => {
                tracing::warn!("document parsing failed: {}", e);
                pipeline.try_update(|p| p.cancel_remaining());
                failure.try_set(Some(e));
            }
        }
    });

    let proceed = move |_| {
        let payload = ParsedPayload {
            parsed: pipeline.with(collect_results),
            upload: upload.get_value(),
        };
        ctx.hand_off(Handoff::Parsed(payload));
        navigate("/proposal-generation", Default::default());
    };

    view! {
        <div class="page-header">
            <div>
                <h1>"Document Analysis"</h1>
                <p class="muted">"Analyzing your documents to prepare for proposal generation"</p>
            </div>
        </div>

        <section class="card">
            <ParsingProgress pipeline=pipeline />
        </section>

        {move || failure.get().map(|e| view! {
            <div class="alert error">
                <IconGlyph icon=Icon::Alert />
                <div>
                    <h3>"Analysis Error"</h3>
                    <p>{e.to_string()}</p>
                </div>
            </div>
        })}

        <Show when=move || finished.get()>
            <div class="alert success">
                <IconGlyph icon=Icon::Check />
                <div>
                    <h3>"Analysis Complete"</h3>
                    <p>"All documents have been analyzed. Review the results above before continuing."</p>
                    <button type="button" class="btn primary" on:click=proceed.clone()>
                        "Proceed to Proposal Generation"
                        <IconGlyph icon=Icon::ChevronRight />
                    </button>
                </div>
            </div>
        </Show>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collect_results_from_completed_steps() {
        let mut p = StepPipeline::new(mock_data::parsing_steps());
        for id in p.ids() {
            p.start(id).unwrap();
            p.complete(id, mock_data::parse_step_result(id).unwrap()).unwrap();
        }
        let parsed = collect_results(&p);
        assert_eq!(parsed.analysis, Some(mock_data::project_analysis()));
        assert_eq!(parsed.similar, mock_data::similar_documents());
    }

    #[test]
    fn test_collect_results_before_any_step() {
        let p = StepPipeline::new(mock_data::parsing_steps());
        let parsed = collect_results(&p);
        assert!(parsed.analysis.is_none());
        assert!(parsed.similar.is_empty());
    }
}

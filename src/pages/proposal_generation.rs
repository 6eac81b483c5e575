//! Proposal Generation page
//!
//! Generates the proposal sections one after another from the parsing
//! results and offers the finished proposal as a Markdown download.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::config::use_config;
use crate::context::use_app_context;
use crate::download::{download, MIME_MARKDOWN};
use crate::error::TaskError;
use crate::icon::{Icon, IconGlyph};
use crate::notifications::{NewNotification, NotificationCategory};
use crate::proposal::{download_name, proposal_steps, section_content, to_markdown, SectionContent};
use crate::store::{store_add_notification, use_app_store};
use crate::workflow::{run_pipeline, CancelToken, StepPipeline, StepTiming, TaskStatus};

fn proposal_markdown(pipeline: &StepPipeline<SectionContent>) -> String {
    to_markdown(
        pipeline
            .steps()
            .iter()
            .map(|s| (s.name, s.result.as_deref().unwrap_or_default())),
    )
}

#[component]
pub fn ProposalGenerationPage() -> impl IntoView {
    let config = use_config();
    let ctx = use_app_context();
    let store = use_app_store();
    let navigate = use_navigate();

    let payload = StoredValue::new(ctx.take_parsed());
    let pipeline = RwSignal::new(StepPipeline::new(proposal_steps()));
    let generating = RwSignal::new(false);
    let download_ready = Memo::new(move |_| pipeline.with(|p| p.succeeded()));

    // Only reachable from the parsing page
    Effect::new(move |_| {
        if payload.with_value(|p| p.is_none()) {
            tracing::warn!("proposal generation opened without parsing results");
            navigate(
                "/upload",
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            );
        }
    });

    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }
    let timing = StepTiming {
        gap_ms: 0,
        duration_ms: config.simulation.proposal_section_ms,
    };

    let generate_all = move |_| {
        let Some(parsed) = payload.get_value() else {
            return;
        };
        generating.set(true);
        pipeline.set(StepPipeline::new(proposal_steps()));
        let token = token.clone();
        spawn_local(async move {
            let ids = pipeline.with_untracked(|p| p.ids());
            let resolve = |id: &str| Ok(Some(section_content(id, &parsed)));
            let emit = move |event| {
                if let Some(Err(e)) = pipeline.try_update(|p| p.apply(event)) {
                    tracing::warn!("proposal step rejected: {}", e);
                }
            };
            match run_pipeline(ids, timing, token, resolve, emit).await {
                Ok(()) => {
                    tracing::info!("proposal generated");
                    store_add_notification(
                        &store,
                        NewNotification::new(
                            NotificationCategory::Success,
                            "Proposal Generated",
                            "All proposal sections have been generated and are ready to download.",
                        )
                        .with_action_url("/proposal-generation"),
                    );
                }
                Err(TaskError::Cancelled) => return,
                Err(e) => tracing::warn!("proposal generation failed: {}", e),
            }
            generating.try_set(false);
        });
    };

    let download_proposal = move |_| {
        let Some(parsed) = payload.get_value() else {
            return;
        };
        let content = pipeline.with(proposal_markdown);
        if let Err(e) = download(&download_name(&parsed), MIME_MARKDOWN, &content) {
            tracing::warn!("proposal download failed: {}", e);
        }
    };

    view! {
        <div class="page-header">
            <div>
                <h1>"Proposal Generation"</h1>
                <p class="muted">"Generate and customize your proposal sections"</p>
            </div>
            <div class="header-actions">
                <button
                    type="button"
                    class="btn primary"
                    disabled=move || generating.get()
                    on:click=generate_all
                >
                    {move || {
                        let icon = if generating.get() { Icon::Refresh } else { Icon::FileText };
                        view! { <IconGlyph icon=icon /> }
                    }}
                    {move || if generating.get() { "Generating..." } else { "Generate All Sections" }}
                </button>
                <Show when=move || download_ready.get()>
                    <button type="button" class="btn" on:click=download_proposal>
                        <IconGlyph icon=Icon::Download />
                        "Download Proposal"
                    </button>
                </Show>
            </div>
        </div>

        <div class="proposal-sections">
            {move || {
                pipeline.with(|p| {
                    p.steps()
                        .iter()
                        .map(|s| {
                            let done = s.status == TaskStatus::Completed;
                            let running = s.status == TaskStatus::Running;
                            let content = s.result.clone();
                            view! {
                                <section class="card proposal-section" class:running=running>
                                    <div class="card-header">
                                        <h3>{s.name}</h3>
                                        {done.then(|| view! { <IconGlyph icon=Icon::Check class="ok" /> })}
                                    </div>
                                    {match content {
                                        Some(text) => view! { <pre class="section-content">{text}</pre> }.into_any(),
                                        None => view! {
                                            <p class="muted">"Content will be generated automatically"</p>
                                        }
                                        .into_any(),
                                    }}
                                </section>
                            }
                        })
                        .collect_view()
                })
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_of_partial_pipeline() {
        let mut p = StepPipeline::new(proposal_steps());
        p.start("executive-summary").unwrap();
        p.complete("executive-summary", Some("Summary text".to_string())).unwrap();
        let md = proposal_markdown(&p);
        assert!(md.starts_with("# Executive Summary\n\nSummary text\n\n---\n\n# Project Overview\n\n\n\n"));
        assert_eq!(md.matches("---").count(), 5);
    }
}

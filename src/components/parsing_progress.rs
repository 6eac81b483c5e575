//! Parsing Progress Component
//!
//! Vertical step tracker for the document analysis pipeline.

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};
use crate::models::ParseOutcome;
use crate::workflow::{Step, StepPipeline, TaskStatus};

fn status_class(status: &TaskStatus) -> &'static str {
    match status {
        TaskStatus::Pending => "step pending",
        TaskStatus::Running => "step running",
        TaskStatus::Completed => "step completed",
        TaskStatus::Failed(_) => "step failed",
    }
}

fn status_icon(status: &TaskStatus) -> Icon {
    match status {
        TaskStatus::Pending => Icon::Clock,
        TaskStatus::Running => Icon::Refresh,
        TaskStatus::Completed => Icon::Check,
        TaskStatus::Failed(_) => Icon::Alert,
    }
}

/// One-line state of the whole pipeline
fn progress_summary<R: Clone>(pipeline: &StepPipeline<R>) -> String {
    let total = pipeline.steps().len();
    if !pipeline.is_finished() {
        return match pipeline.current() {
            Some(step) => format!("Step {} of {}: {}", pipeline.completed_count() + 1, total, step.name),
            None => String::new(),
        };
    }
    if pipeline.has_failed() {
        format!("Stopped after {} of {} steps", pipeline.completed_count(), total)
    } else {
        format!("All {} steps complete", total)
    }
}

#[component]
pub fn ParsingProgress(#[prop(into)] pipeline: Signal<StepPipeline<ParseOutcome>>) -> impl IntoView {
    let ids = move || pipeline.with(|p| p.ids());

    view! {
        <p class="muted progress-summary">{move || pipeline.with(progress_summary)}</p>
        <ol class="parsing-progress">
            <For
                each=ids
                key=|id| *id
                children=move |id| {
                    let step = Memo::new(move |_| pipeline.with(|p| p.get(id).cloned()));
                    move || step.get().map(|s| view! { <StepRow step=s /> })
                }
            />
        </ol>
    }
}

#[component]
fn StepRow(step: Step<ParseOutcome>) -> impl IntoView {
    let (expanded, set_expanded) = signal(false);
    let error = step.status.error().map(|e| e.to_string());
    let result = step.result.clone();
    let has_result = result.is_some() && step.status == TaskStatus::Completed;

    view! {
        <li class=status_class(&step.status)>
            <span class="step-icon"><IconGlyph icon=status_icon(&step.status) /></span>
            <div class="step-body">
                <div class="step-header">
                    <div>
                        <h3>{step.name}</h3>
                        <p class="muted">{step.description}</p>
                    </div>
                    {has_result.then(|| view! {
                        <button
                            type="button"
                            class="link-btn"
                            on:click=move |_| set_expanded.update(|v| *v = !*v)
                        >
                            {move || if expanded.get() { "Hide" } else { "View" }}
                            <IconGlyph icon=Icon::ChevronRight />
                        </button>
                    })}
                </div>
                {error.map(|msg| view! { <p class="step-error">{msg}</p> })}
                <Show when=move || expanded.get()>
                    {result.clone().map(|r| view! { <OutcomeDetail outcome=r /> })}
                </Show>
            </div>
        </li>
    }
}

#[component]
fn OutcomeDetail(outcome: ParseOutcome) -> impl IntoView {
    match outcome {
        ParseOutcome::Analysis(a) => view! {
            <dl class="outcome-detail">
                <dt>"Project Type"</dt><dd>{a.project_type}</dd>
                <dt>"Domain"</dt><dd>{a.domain}</dd>
                <dt>"Complexity"</dt><dd>{a.complexity.label()}</dd>
                <dt>"Key Challenges"</dt>
                <dd>
                    <ul>
                        {a.challenges.into_iter().map(|c| view! { <li>{c}</li> }).collect_view()}
                    </ul>
                </dd>
            </dl>
        }
        .into_any(),
        ParseOutcome::Similar(docs) => view! {
            <ul class="outcome-detail similar">
                {docs
                    .into_iter()
                    .map(|d| view! {
                        <li>
                            <span>{d.name}</span>
                            <span class="badge blue">{format!("{}% similar", d.similarity)}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        }
        .into_any(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TaskError;
    use crate::mock_data;

    #[test]
    fn test_progress_summary() {
        let mut p: StepPipeline<ParseOutcome> = StepPipeline::new(mock_data::parsing_steps());
        let ids = p.ids();
        assert!(progress_summary(&p).starts_with("Step 1 of 4: "));

        p.start(ids[0]).unwrap();
        p.complete(ids[0], None).unwrap();
        p.start(ids[1]).unwrap();
        let name = p.get(ids[1]).map(|s| s.name).unwrap();
        assert_eq!(progress_summary(&p), format!("Step 2 of 4: {}", name));

        p.fail(ids[1], TaskError::Cancelled).unwrap();
        p.cancel_remaining();
        assert_eq!(progress_summary(&p), "Stopped after 1 of 4 steps");
    }

    #[test]
    fn test_progress_summary_all_done() {
        let mut p: StepPipeline<ParseOutcome> = StepPipeline::new(mock_data::parsing_steps());
        for id in p.ids() {
            p.start(id).unwrap();
            p.complete(id, None).unwrap();
        }
        assert_eq!(progress_summary(&p), "All 4 steps complete");
    }
}

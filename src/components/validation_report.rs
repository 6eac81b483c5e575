//! Validation Report Component

use leptos::prelude::*;

use crate::icon::IconGlyph;
use crate::models::{severity_counts, ValidationItem};

#[component]
pub fn ValidationReport(items: Vec<ValidationItem>) -> impl IntoView {
    let counts = severity_counts(&items);

    view! {
        <div class="validation-report">
            <div class="severity-grid">
                {counts
                    .into_iter()
                    .map(|(severity, count)| view! {
                        <div class=format!("severity-card {}", severity.css_class())>
                            <IconGlyph icon=severity.icon() />
                            <span class="severity-count">{count}</span>
                            <span class="severity-label">{severity.plural()}</span>
                        </div>
                    })
                    .collect_view()}
            </div>
            <ul class="validation-items">
                {items.into_iter().map(|item| view! { <ReportItem item=item /> }).collect_view()}
            </ul>
        </div>
    }
}

#[component]
fn ReportItem(item: ValidationItem) -> impl IntoView {
    let location = item.location();
    let failed = item.failed_standards.clone();

    view! {
        <li class=format!("validation-item {}", item.severity.css_class())>
            <IconGlyph icon=item.severity.icon() class="item-icon" />
            <div class="item-body">
                <p class="item-message">{item.message}</p>
                {location.map(|l| view! { <p class="muted small">{l}</p> })}
                {item.details.map(|d| view! { <p class="item-details">{d}</p> })}
                {(!failed.is_empty()).then(|| view! {
                    <div class="chips">
                        <span class="muted small">"Failed standards:"</span>
                        {failed
                            .into_iter()
                            .map(|f| view! {
                                <span class=f.category.css_class() title=f.category.label()>
                                    {f.name}
                                </span>
                            })
                            .collect_view()}
                    </div>
                })}
            </div>
        </li>
    }
}

//! Validation References Component
//!
//! Standards grouped by category with selection checkboxes. Mandatory
//! standards are always checked and cannot be toggled.

use leptos::prelude::*;

use crate::icon::IconGlyph;
use crate::models::{group_standards, StandardSelection, ValidationStandard};

#[component]
pub fn ValidationReferences(
    standards: Vec<ValidationStandard>,
    #[prop(into)] selection: Signal<StandardSelection>,
    #[prop(into)] on_toggle: Callback<&'static str>,
) -> impl IntoView {
    let groups = group_standards(&standards);

    view! {
        <section class="card validation-references">
            <div class="card-header">
                <h2>"Validation Standards"</h2>
                <span class="muted">{move || format!("{} selected", selection.with(|s| s.len()))}</span>
            </div>
            {groups
                .into_iter()
                .map(|(category, list)| view! {
                    <div class="standard-group">
                        <h3 class=format!("group-title {}", category.css_class())>
                            <IconGlyph icon=category.icon() />
                            {category.label()}
                        </h3>
                        <ul>
                            {list
                                .into_iter()
                                .map(|s| view! { <StandardRow standard=s selection=selection on_toggle=on_toggle /> })
                                .collect_view()}
                        </ul>
                    </div>
                })
                .collect_view()}
        </section>
    }
}

#[component]
fn StandardRow(
    standard: ValidationStandard,
    selection: Signal<StandardSelection>,
    on_toggle: Callback<&'static str>,
) -> impl IntoView {
    let id = standard.id;
    let checked = move || selection.with(|s| s.contains(id));

    view! {
        <li class="standard-row">
            <label>
                <input
                    type="checkbox"
                    prop:checked=checked
                    disabled=standard.mandatory
                    on:change=move |_| on_toggle.run(id)
                />
                <span class="standard-name">{standard.name}</span>
                {standard.mandatory.then(|| view! { <span class="badge red">"Required"</span> })}
            </label>
            <p class="muted small">{standard.description}</p>
            <p class="muted small">
                {format!("Version {} · Updated {}", standard.version, standard.last_updated)}
                {standard.source.map(|src| view! {
                    " · "
                    <a href=src target="_blank" rel="noopener noreferrer">"Source"</a>
                })}
            </p>
        </li>
    }
}

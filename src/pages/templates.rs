//! Templates page
//!
//! Searchable template grid; selecting or creating a template opens the
//! editor in place of the grid.

use leptos::prelude::*;

use crate::components::TemplateEditor;
use crate::format::pluralize;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::Template;

/// Insert a new template or replace the one with the same id
fn save_template(templates: &mut Vec<Template>, template: Template) {
    match templates.iter_mut().find(|t| t.id == template.id) {
        Some(existing) => *existing = template,
        None => templates.push(template),
    }
}

#[component]
pub fn TemplatesPage() -> impl IntoView {
    let templates = RwSignal::new(mock_data::templates());
    let query = RwSignal::new(String::new());
    // Template being edited and whether it is new
    let editing = RwSignal::new(None::<(Template, bool)>);

    let visible = move || {
        let q = query.get();
        templates.with(|all| all.iter().filter(|t| t.matches(&q)).cloned().collect::<Vec<_>>())
    };

    let create = move |_| {
        let id = uuid::Uuid::new_v4().to_string();
        editing.set(Some((Template::blank(id), true)));
    };

    let on_save = Callback::new(move |template: Template| {
        tracing::info!(id = %template.id, name = %template.name, "template saved");
        templates.update(|all| save_template(all, template));
        editing.set(None);
    });

    let close = Callback::new(move |_: ()| editing.set(None));

    view! {
        {move || match editing.get() {
            Some((template, is_new)) => {
                let id = template.id.clone();
                let on_delete = Callback::new(move |_: ()| {
                    tracing::info!(%id, "template deleted");
                    templates.update(|all| all.retain(|t| t.id != id));
                    editing.set(None);
                });
                view! {
                    <div class="page-header">
                        <button type="button" class="link-btn" on:click=move |_| close.run(())>
                            <IconGlyph icon=Icon::ChevronLeft />
                            "Back to Templates"
                        </button>
                    </div>
                    <TemplateEditor
                        template=template
                        is_new=is_new
                        on_save=on_save
                        on_delete=on_delete
                        on_cancel=close
                    />
                }
                .into_any()
            }
            None => view! {
                <div class="page-header">
                    <div>
                        <h1>"Proposal Templates"</h1>
                        <p class="muted">"Manage and customize your proposal templates"</p>
                    </div>
                    <button type="button" class="btn primary" on:click=create>
                        <IconGlyph icon=Icon::Plus />
                        "New Template"
                    </button>
                </div>

                <div class="search-field">
                    <IconGlyph icon=Icon::Search />
                    <input
                        type="text"
                        placeholder="Search templates..."
                        prop:value=move || query.get()
                        on:input=move |ev| query.set(event_target_value(&ev))
                    />
                </div>

                <div class="card-grid">
                    <For
                        each=visible
                        key=|t| t.id.clone()
                        children=move |t| {
                            let open = t.clone();
                            view! {
                                <div
                                    class="card template-card clickable"
                                    on:click=move |_| editing.set(Some((open.clone(), false)))
                                >
                                    <div class="doc-heading">
                                        <IconGlyph icon=Icon::Template class="doc-icon" />
                                        <div>
                                            <p class="row-title">{t.name}</p>
                                            <p class="muted clamp">{t.description}</p>
                                        </div>
                                    </div>
                                    <div class="card-footer">
                                        <span class="badge blue">{t.category.label()}</span>
                                        <span class="muted small">
                                            {pluralize(t.sections.len(), "section", "sections")}
                                        </span>
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            }
            .into_any(),
        }}
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_replaces_existing_template() {
        let mut all = mock_data::templates();
        let count = all.len();
        let mut edited = all[0].clone();
        edited.name = "Renamed".to_string();
        save_template(&mut all, edited);
        assert_eq!(all.len(), count);
        assert_eq!(all[0].name, "Renamed");
    }

    #[test]
    fn test_save_appends_new_template() {
        let mut all = mock_data::templates();
        let count = all.len();
        let mut fresh = Template::blank("new-id".to_string());
        fresh.name = "Fresh".to_string();
        save_template(&mut all, fresh);
        assert_eq!(all.len(), count + 1);
        assert_eq!(all.last().map(|t| t.name.as_str()), Some("Fresh"));
    }
}

//! Template Editor Component
//!
//! Edits one proposal template: metadata, plus a section list that can be
//! extended, trimmed and reordered by dragging.

use leptos::prelude::*;
use leptos_dragdrop::{bind_global_listeners, create_dnd_signals, make_on_mouseleave, make_on_mousedown, make_on_slot_mouseenter, reorder};

use crate::components::DeleteConfirmButton;
use crate::icon::{Icon, IconGlyph};
use crate::models::{Template, TemplateCategory, TemplateSection};
use crate::validation::check_template_name;

fn section_index(template: &Template, id: &str) -> Option<usize> {
    template.sections.iter().position(|s| s.id == id)
}

#[component]
pub fn TemplateEditor(
    template: Template,
    is_new: bool,
    #[prop(into)] on_save: Callback<Template>,
    #[prop(into)] on_delete: Callback<()>,
    #[prop(into)] on_cancel: Callback<()>,
) -> impl IntoView {
    let draft = RwSignal::new(template);
    let (error, set_error) = signal(None::<String>);
    let dnd = create_dnd_signals();

    let listeners = bind_global_listeners(dnd, move |from, slot| {
        draft.update(|t| {
            if reorder(&mut t.sections, from, slot) {
                tracing::debug!(from, slot, "template section moved");
            }
        });
    });
    on_cleanup(move || listeners.remove());

    let add_section = move |_| {
        let id = uuid::Uuid::new_v4().to_string();
        draft.update(|t| t.sections.push(TemplateSection::blank(id)));
    };

    let save = move |_| {
        let current = draft.get_untracked();
        match check_template_name(&current.name) {
            Ok(()) => {
                set_error.set(None);
                on_save.run(current);
            }
            Err(e) => set_error.set(Some(e.to_string())),
        }
    };

    let section_ids = move || draft.with(|t| t.sections.iter().map(|s| s.id.clone()).collect::<Vec<_>>());
    let section_count = move || draft.with(|t| t.sections.len());

    view! {
        <div class="template-editor">
            <section class="card">
                <label class="field">
                    <span>"Template Name"</span>
                    <input
                        type="text"
                        prop:value=move || draft.with(|t| t.name.clone())
                        on:input=move |ev| draft.update(|t| t.name = event_target_value(&ev))
                    />
                </label>
                {move || error.get().map(|e| view! { <p class="field-error">{e}</p> })}
                <label class="field">
                    <span>"Description"</span>
                    <textarea
                        rows="3"
                        prop:value=move || draft.with(|t| t.description.clone())
                        on:input=move |ev| draft.update(|t| t.description = event_target_value(&ev))
                    ></textarea>
                </label>
                <label class="field">
                    <span>"Category"</span>
                    <select
                        prop:value=move || draft.with(|t| t.category.value())
                        on:change=move |ev| draft.update(|t| t.category = TemplateCategory::from_value(&event_target_value(&ev)))
                    >
                        {TemplateCategory::ALL
                            .into_iter()
                            .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                            .collect_view()}
                    </select>
                </label>
            </section>

            <section class="card">
                <div class="card-header">
                    <h3>"Sections"</h3>
                    <button type="button" class="btn" on:click=add_section>
                        <IconGlyph icon=Icon::Plus />
                        "Add Section"
                    </button>
                </div>
                <div class="section-list" class:dragging=move || dnd.dragging.get().is_some()>
                    <For
                        each=section_ids
                        key=|id| id.clone()
                        children=move |id| {
                            let index = {
                                let id = id.clone();
                                Memo::new(move |_| draft.with(|t| section_index(t, &id)))
                            };
                            view! { <SectionRow id=id index=index draft=draft dnd=dnd /> }
                        }
                    />
                    <div
                        class="drop-slot"
                        class:over=move || dnd.is_over(section_count())
                        on:mouseenter=move |ev| make_on_slot_mouseenter(dnd, section_count())(ev)
                        on:mouseleave=make_on_mouseleave(dnd)
                    ></div>
                </div>
            </section>

            <div class="editor-actions">
                <button type="button" class="btn" on:click=move |_| on_cancel.run(())>"Cancel"</button>
                {(!is_new).then(|| view! {
                    <DeleteConfirmButton
                        button_class="btn danger"
                        label="Delete Template"
                        prompt="Delete this template?"
                        on_confirm=move |_: ()| on_delete.run(())
                    />
                })}
                <button type="button" class="btn primary" on:click=save>
                    <IconGlyph icon=Icon::Save />
                    {if is_new { "Create Template" } else { "Save Changes" }}
                </button>
            </div>
        </div>
    }
}

#[component]
fn SectionRow(
    id: String,
    index: Memo<Option<usize>>,
    draft: RwSignal<Template>,
    dnd: leptos_dragdrop::DndSignals,
) -> impl IntoView {
    let read = {
        let id = id.clone();
        move |f: fn(&TemplateSection) -> String| {
            draft.with(|t| t.sections.iter().find(|s| s.id == id).map(f).unwrap_or_default())
        }
    };
    let write = {
        let id = id.clone();
        move |f: &dyn Fn(&mut TemplateSection)| {
            draft.update(|t| {
                if let Some(s) = t.sections.iter_mut().find(|s| s.id == id) {
                    f(s);
                }
            })
        }
    };
    let required = {
        let id = id.clone();
        move || draft.with(|t| t.sections.iter().any(|s| s.id == id && s.required))
    };
    let remove = {
        let id = id.clone();
        move |_| draft.update(|t| t.sections.retain(|s| s.id != id))
    };

    let at = move || index.get().unwrap_or_default();
    let (r1, r2, r3) = (read.clone(), read.clone(), read);
    let (w1, w2, w3, w4) = (write.clone(), write.clone(), write.clone(), write);

    view! {
        <div
            class="drop-slot"
            class:over=move || dnd.is_over(at())
            on:mouseenter=move |ev| make_on_slot_mouseenter(dnd, at())(ev)
            on:mouseleave=make_on_mouseleave(dnd)
        ></div>
        <div
            class="section-row"
            class:dragging=move || dnd.is_dragging(at())
            on:mousedown=move |ev| make_on_mousedown(dnd, at())(ev)
        >
            <span class="drag-handle"><IconGlyph icon=Icon::Grip /></span>
            <div class="section-fields">
                <div class="section-title-row">
                    <label class="field">
                        <span>"Section Title"</span>
                        <input
                            type="text"
                            prop:value=move || r1(|s| s.title.clone())
                            on:input=move |ev| {
                                let v = event_target_value(&ev);
                                w1(&|s| s.title = v.clone());
                            }
                        />
                    </label>
                    <label class="checkbox">
                        <input
                            type="checkbox"
                            prop:checked=required
                            on:change=move |ev| {
                                let checked = event_target_checked(&ev);
                                w2(&|s| s.required = checked);
                            }
                        />
                        <span>"Required"</span>
                    </label>
                    <button type="button" class="icon-btn danger" on:click=remove>
                        <IconGlyph icon=Icon::Trash />
                    </button>
                </div>
                <label class="field">
                    <span>"Description"</span>
                    <input
                        type="text"
                        prop:value=move || r2(|s| s.description.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            w3(&|s| s.description = v.clone());
                        }
                    />
                </label>
                <label class="field">
                    <span>"Default Content"</span>
                    <textarea
                        rows="3"
                        prop:value=move || r3(|s| s.default_content.clone())
                        on:input=move |ev| {
                            let v = event_target_value(&ev);
                            w4(&|s| s.default_content = v.clone());
                        }
                    ></textarea>
                </label>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn test_reorder_template_sections() {
        let mut template = mock_data::templates().remove(0);
        let first = template.sections[0].id.clone();
        let n = template.sections.len();
        assert!(reorder(&mut template.sections, 0, n));
        assert_eq!(section_index(&template, &first), Some(n - 1));
        assert_eq!(template.sections.len(), n);
    }

    #[test]
    fn test_blank_section_appended() {
        let mut template = Template::blank("t".to_string());
        template.sections.push(TemplateSection::blank("s1".to_string()));
        assert_eq!(section_index(&template, "s1"), Some(0));
        assert_eq!(template.sections[0].title, "New Section");
        assert!(!template.sections[0].required);
    }
}

//! Delete Confirm Button
//!
//! Two-stage delete used by document cards and the template editor.

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};

/// Trash button that asks `prompt` before running `on_confirm`.
///
/// Clicks never bubble, so the button can sit inside clickable cards and menus.
#[component]
pub fn DeleteConfirmButton(
    #[prop(into)] button_class: String,
    #[prop(into, default = "Delete".to_string())] label: String,
    #[prop(into, default = "Delete?".to_string())] prompt: String,
    #[prop(into)] on_confirm: Callback<()>,
) -> impl IntoView {
    let confirming = RwSignal::new(false);
    let label = StoredValue::new(label);
    let button_class = StoredValue::new(button_class);

    let answer = move |ev: web_sys::MouseEvent, confirmed: bool| {
        ev.stop_propagation();
        confirming.set(false);
        if confirmed {
            on_confirm.run(());
        }
    };

    view! {
        <Show
            when=move || confirming.get()
            fallback=move || view! {
                <button
                    type="button"
                    class=button_class.get_value()
                    on:click=move |ev| {
                        ev.stop_propagation();
                        confirming.set(true);
                    }
                >
                    <IconGlyph icon=Icon::Trash />
                    {label.get_value()}
                </button>
            }
        >
            <span class="delete-confirm" role="alertdialog">
                <span class="delete-confirm-text">{prompt.clone()}</span>
                <button type="button" class="btn danger small" on:click=move |ev| answer(ev, true)>
                    "Delete"
                </button>
                <button type="button" class="btn small" on:click=move |ev| answer(ev, false)>
                    "Cancel"
                </button>
            </span>
        </Show>
    }
}

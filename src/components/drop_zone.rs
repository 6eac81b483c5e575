//! File Drop Zone Component
//!
//! Drag-and-drop target with a click-to-browse fallback. Emits the picked
//! files' metadata; contents are never read.

use leptos::prelude::*;
use leptos::html;
use web_sys::DragEvent;

use crate::icon::{Icon, IconGlyph};

/// Metadata of a file picked by the user
#[derive(Debug, Clone, PartialEq)]
pub struct PickedFile {
    pub name: String,
    pub size: u64,
    pub mime: String,
}

fn collect_files(list: Option<web_sys::FileList>) -> Vec<PickedFile> {
    let Some(list) = list else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.get(i))
        .map(|f| PickedFile {
            name: f.name(),
            size: f.size() as u64,
            mime: f.type_(),
        })
        .collect()
}

#[component]
pub fn FileDropZone(
    /// Value for the input's `accept` attribute
    #[prop(into)] accept: String,
    /// Hint shown under the prompt
    #[prop(into)] hint: String,
    on_files: Callback<Vec<PickedFile>>,
) -> impl IntoView {
    let (is_over, set_is_over) = signal(false);
    let input_ref = NodeRef::<html::Input>::new();

    let on_dragover = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(true);
    };

    let on_dragleave = move |_: DragEvent| {
        set_is_over.set(false);
    };

    let on_drop_handler = move |ev: DragEvent| {
        ev.prevent_default();
        set_is_over.set(false);
        let files = collect_files(ev.data_transfer().and_then(|dt| dt.files()));
        if !files.is_empty() {
            on_files.run(files);
        }
    };

    let on_change = move |_| {
        let Some(input) = input_ref.get() else {
            return;
        };
        let files = collect_files(input.files());
        // Allow picking the same file again
        input.set_value("");
        if !files.is_empty() {
            on_files.run(files);
        }
    };

    view! {
        <div
            class=move || if is_over.get() { "file-drop-zone active" } else { "file-drop-zone" }
            on:dragover=on_dragover
            on:dragleave=on_dragleave
            on:drop=on_drop_handler
            on:click=move |_| {
                if let Some(input) = input_ref.get() {
                    input.click();
                }
            }
        >
            <IconGlyph icon=Icon::Upload class="drop-icon" />
            <p>"Drag and drop files here, or "<span class="link">"browse"</span></p>
            <p class="hint">{hint}</p>
            <input
                node_ref=input_ref
                type="file"
                multiple=true
                accept=accept
                class="hidden-input"
                on:change=on_change
                on:click=|ev| ev.stop_propagation()
            />
        </div>
    }
}

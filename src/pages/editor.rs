//! Editor page
//!
//! Markdown document editor with side-by-side edit and preview.

use leptos::prelude::*;

use crate::format::pluralize;
use crate::icon::{Icon, IconGlyph};
use crate::markdown::{char_count, parse_markdown, word_count};

const UNTITLED: &str = "Untitled Document";

/// Name kept after editing; blank falls back to the default title
fn committed_name(draft: &str) -> String {
    let trimmed = draft.trim();
    if trimmed.is_empty() {
        UNTITLED.to_string()
    } else {
        trimmed.to_string()
    }
}

#[component]
pub fn EditorPage() -> impl IntoView {
    let (content, set_content) = signal(String::new());
    let (name, set_name) = signal(UNTITLED.to_string());
    let (editing_name, set_editing_name) = signal(false);
    let (name_draft, set_name_draft) = signal(String::new());

    let start_rename = move |_| {
        set_name_draft.set(name.get_untracked());
        set_editing_name.set(true);
    };
    let commit = move || {
        if editing_name.get_untracked() {
            set_name.set(committed_name(&name_draft.get_untracked()));
            set_editing_name.set(false);
        }
    };

    let save = move |_| {
        let text = content.get_untracked();
        tracing::info!(name = %name.get_untracked(), words = word_count(&text), "document saved");
        tracing::debug!(%text, "saved content");
    };

    // Rendered HTML for preview
    let rendered_html = move || parse_markdown(&content.get());
    let counts = move || {
        content.with(|c| {
            format!(
                "{} · {}",
                pluralize(word_count(c), "word", "words"),
                pluralize(char_count(c), "character", "characters")
            )
        })
    };

    view! {
        <div class="page-header">
            <Show
                when=move || editing_name.get()
                fallback=move || view! {
                    <h1 class="editable-title" on:click=start_rename>
                        {move || name.get()}
                        <IconGlyph icon=Icon::Edit class="muted" />
                    </h1>
                }
            >
                <input
                    type="text"
                    class="title-input"
                    autofocus
                    prop:value=move || name_draft.get()
                    on:input=move |ev| set_name_draft.set(event_target_value(&ev))
                    on:blur=move |_| commit()
                    on:keydown=move |ev| {
                        if ev.key() == "Enter" {
                            commit();
                        }
                    }
                />
            </Show>
            <button type="button" class="btn primary" on:click=save>
                <IconGlyph icon=Icon::Save />
                "Save"
            </button>
        </div>

        <div class="editor-body">
            <div class="editor-pane">
                <div class="pane-header">"Markdown"</div>
                <textarea
                    class="editor-textarea"
                    placeholder="Start typing your content here..."
                    prop:value=move || content.get()
                    on:input=move |ev| set_content.set(event_target_value(&ev))
                ></textarea>
            </div>
            <div class="editor-pane">
                <div class="pane-header">"Preview"</div>
                <div class="markdown-preview" inner_html=rendered_html></div>
            </div>
        </div>
        <p class="muted small editor-counts">{counts}</p>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_committed_name() {
        assert_eq!(committed_name("  Q3 Proposal "), "Q3 Proposal");
        assert_eq!(committed_name("   "), UNTITLED);
    }
}

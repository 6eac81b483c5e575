//! Chat History Sidebar
//!
//! Collapsible panel listing past conversations with a title search.

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::ChatHistoryEntry;

pub fn filter_history(entries: &[ChatHistoryEntry], query: &str) -> Vec<ChatHistoryEntry> {
    let q = query.trim().to_lowercase();
    entries
        .iter()
        .filter(|e| q.is_empty() || e.title.to_lowercase().contains(&q))
        .cloned()
        .collect()
}

#[component]
pub fn ChatHistorySidebar(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] on_toggle: Callback<()>,
    #[prop(into)] on_new_chat: Callback<()>,
) -> impl IntoView {
    let history = mock_data::chat_history();
    let (query, set_query) = signal(String::new());
    let (selected, set_selected) = signal(None::<&'static str>);

    let visible = Memo::new(move |_| query.with(|q| filter_history(&history, q)));

    view! {
        <aside class="chat-history" class:open=move || is_open.get()>
            <button type="button" class="chat-history-toggle" on:click=move |_| on_toggle.run(())>
                {move || {
                    let icon = if is_open.get() { Icon::ChevronRight } else { Icon::ChevronLeft };
                    view! { <IconGlyph icon=icon /> }
                }}
            </button>
            <Show when=move || is_open.get()>
                <div class="chat-history-header">
                    <h2>"Chat History"</h2>
                    <div class="search-field">
                        <IconGlyph icon=Icon::Search />
                        <input
                            type="text"
                            placeholder="Search conversations..."
                            prop:value=move || query.get()
                            on:input=move |ev| set_query.set(event_target_value(&ev))
                        />
                    </div>
                </div>
                <button type="button" class="btn primary new-chat" on:click=move |_| on_new_chat.run(())>
                    <IconGlyph icon=Icon::Plus />
                    "New Chat"
                </button>
                <ul class="chat-history-list">
                    <For
                        each=move || visible.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let id = entry.id;
                            view! {
                                <li
                                    class:selected=move || selected.get() == Some(id)
                                    on:click=move |_| set_selected.set(Some(id))
                                >
                                    <IconGlyph icon=Icon::Chat />
                                    <div>
                                        <h3>{entry.title}</h3>
                                        <p class="muted clamp">{entry.last_message}</p>
                                        <span class="muted small">{entry.when}</span>
                                    </div>
                                </li>
                            }
                        }
                    />
                </ul>
            </Show>
        </aside>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_search_by_title() {
        let all = mock_data::chat_history();
        assert_eq!(filter_history(&all, "").len(), all.len());
        let hits = filter_history(&all, "proposal");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Proposal Review");
        assert!(filter_history(&all, "nothing like this").is_empty());
    }
}

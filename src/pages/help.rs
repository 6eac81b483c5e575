//! Help Center page

use leptos::prelude::*;

use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::Guide;

/// Guides with only the items matching `query`; guides whose title matches
/// keep every item
fn search_guides(guides: &[Guide], query: &str) -> Vec<Guide> {
    let q = query.trim().to_lowercase();
    if q.is_empty() {
        return guides.to_vec();
    }
    guides
        .iter()
        .filter_map(|g| {
            if g.title.to_lowercase().contains(&q) {
                return Some(g.clone());
            }
            let items: Vec<&'static str> = g.items.iter().copied().filter(|i| i.to_lowercase().contains(&q)).collect();
            (!items.is_empty()).then(|| Guide { items, ..g.clone() })
        })
        .collect()
}

#[component]
pub fn HelpPage() -> impl IntoView {
    let guides = StoredValue::new(mock_data::guides());
    let query = RwSignal::new(String::new());

    let visible = move || query.with(|q| guides.with_value(|all| search_guides(all, q)));

    view! {
        <div class="page-header">
            <div>
                <h1>"Help Center"</h1>
                <p class="muted">"Find guides, tutorials, and answers to common questions"</p>
            </div>
        </div>

        <section class="card help-hero">
            <p>"Can't find what you're looking for? Our support team is here to help."</p>
            <div class="header-actions">
                <a class="btn primary" href="mailto:support@example.com">
                    <IconGlyph icon=Icon::Mail />
                    "Contact Support"
                </a>
                <button type="button" class="btn" on:click=|_| tracing::info!("demo requested")>
                    <IconGlyph icon=Icon::Calendar />
                    "Schedule Demo"
                </button>
            </div>
            <div class="search-field">
                <IconGlyph icon=Icon::Search />
                <input
                    type="text"
                    placeholder="Search help articles..."
                    prop:value=move || query.get()
                    on:input=move |ev| query.set(event_target_value(&ev))
                />
                <kbd>"⌘K"</kbd>
            </div>
        </section>

        <div class="card-grid">
            {move || {
                visible()
                    .into_iter()
                    .map(|guide| view! {
                        <div class="card guide-card">
                            <IconGlyph icon=guide.icon class="doc-icon" />
                            <h3>{guide.title}</h3>
                            <p class="muted">{guide.description}</p>
                            <ul>
                                {guide
                                    .items
                                    .into_iter()
                                    .map(|item| view! { <li><a href="#" class="link-btn">{item}</a></li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    })
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_keeps_matching_items() {
        let all = mock_data::guides();
        assert_eq!(search_guides(&all, " ").len(), all.len());

        let hits = search_guides(&all, "knowledge");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].title, "Tutorials");
        assert_eq!(hits[0].items, vec!["Using the knowledge store"]);
    }

    #[test]
    fn test_search_by_guide_title() {
        let all = mock_data::guides();
        let hits = search_guides(&all, "faq");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].items.len(), 3);
    }
}

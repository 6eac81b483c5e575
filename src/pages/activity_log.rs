//! Activity Log page

use leptos::prelude::*;

use crate::activity::{parse_date_input, to_csv, to_json, ActivityQuery, CSV_FILE_NAME, JSON_FILE_NAME};
use crate::download::{download, MIME_CSV, MIME_JSON};
use crate::format::format_datetime;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data;
use crate::models::{ActivityCategory, ActivityEntry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ExportFormat {
    Csv,
    Json,
}

fn export(format: ExportFormat, entries: &[&ActivityEntry]) {
    let result = match format {
        ExportFormat::Csv => download(CSV_FILE_NAME, MIME_CSV, &to_csv(entries)),
        ExportFormat::Json => match to_json(entries) {
            Ok(json) => download(JSON_FILE_NAME, MIME_JSON, &json),
            Err(e) => {
                tracing::warn!("activity export failed: {}", e);
                return;
            }
        },
    };
    if let Err(e) = result {
        tracing::warn!("activity download failed: {}", e);
    }
}

#[component]
pub fn ActivityLogPage() -> impl IntoView {
    let entries = StoredValue::new(mock_data::activities());
    let query = RwSignal::new(ActivityQuery::default());
    let show_menu = RwSignal::new(false);

    let visible = Memo::new(move |_| {
        query.with(|q| entries.with_value(|all| q.apply(all).into_iter().cloned().collect::<Vec<_>>()))
    });

    let download_as = move |format: ExportFormat| {
        show_menu.set(false);
        visible.with_untracked(|rows| {
            let refs: Vec<&ActivityEntry> = rows.iter().collect();
            export(format, &refs);
        });
    };

    view! {
        <div class="page-header">
            <div>
                <h1>"Activity Log"</h1>
                <p class="muted">"A detailed history of all activities in the system"</p>
            </div>
            <div class="menu-anchor">
                <button type="button" class="btn" on:click=move |_| show_menu.update(|v| *v = !*v)>
                    <IconGlyph icon=Icon::Download />
                    "Download Log"
                </button>
                <Show when=move || show_menu.get()>
                    <div class="dropdown">
                        <button type="button" on:click=move |_| download_as(ExportFormat::Csv)>"Download as CSV"</button>
                        <button type="button" on:click=move |_| download_as(ExportFormat::Json)>"Download as JSON"</button>
                    </div>
                </Show>
            </div>
        </div>

        <div class="filter-row">
            <div class="search-field">
                <IconGlyph icon=Icon::Search />
                <input
                    type="text"
                    placeholder="Search activities..."
                    prop:value=move || query.with(|q| q.search.clone())
                    on:input=move |ev| query.update(|q| q.search = event_target_value(&ev))
                />
            </div>
            <select on:change=move |ev| query.update(|q| q.category = ActivityCategory::from_value(&event_target_value(&ev)))>
                <option value="all">"All Categories"</option>
                {ActivityCategory::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.value()>{c.label()}</option> })
                    .collect_view()}
            </select>
            <div class="date-range">
                <IconGlyph icon=Icon::Calendar />
                <input type="date" on:change=move |ev| query.update(|q| q.start = parse_date_input(&event_target_value(&ev))) />
                <span class="muted">"to"</span>
                <input type="date" on:change=move |ev| query.update(|q| q.end = parse_date_input(&event_target_value(&ev))) />
            </div>
        </div>

        <section class="card">
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=|| view! {
                    <div class="empty-state">
                        <IconGlyph icon=Icon::Activity />
                        <p>"No activities found"</p>
                        <p class="muted">"Try adjusting your search or filter criteria"</p>
                    </div>
                }
            >
                <ul class="activity-list">
                    <For
                        each=move || visible.get()
                        key=|e| e.id.clone()
                        children=|entry| view! { <ActivityRow entry=entry /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn ActivityRow(entry: ActivityEntry) -> impl IntoView {
    view! {
        <li class="activity-row">
            <span class="activity-icon"><IconGlyph icon=entry.category.icon() /></span>
            <div class="activity-body">
                <div class="activity-heading">
                    <p class="row-title">{entry.action}</p>
                    <span class="muted small">{format_datetime(entry.timestamp)}</span>
                </div>
                <p class="muted">{entry.description}</p>
                <div class="activity-meta">
                    <span class="small">
                        <IconGlyph icon=Icon::User />
                        {entry.user_name}
                    </span>
                    {entry
                        .metadata
                        .into_iter()
                        .map(|(key, value)| {
                            let shown = match value {
                                serde_json::Value::String(s) => s,
                                other => other.to_string(),
                            };
                            view! { <span class="chip">{format!("{}: {}", key, shown)}</span> }
                        })
                        .collect_view()}
                </div>
            </div>
        </li>
    }
}

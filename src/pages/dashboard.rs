//! Dashboard page

use leptos::prelude::*;

use crate::format::format_date;
use crate::icon::IconGlyph;
use crate::mock_data;
use crate::models::Trend;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let stats = mock_data::dashboard_stats();
    let recent = mock_data::recent_documents();

    view! {
        <div class="page-header">
            <h1>"Dashboard"</h1>
            <p class="muted">"Overview of your bid activity"</p>
        </div>

        <div class="stat-grid">
            {stats
                .into_iter()
                .map(|stat| {
                    let trend_class = match stat.trend {
                        Trend::Positive => "change positive",
                        Trend::Negative => "change negative",
                    };
                    view! {
                        <div class="card stat-card">
                            <IconGlyph icon=stat.icon class="stat-icon" />
                            <div>
                                <p class="muted">{stat.name}</p>
                                <p class="stat-value">
                                    {stat.value}
                                    <span class=trend_class>{stat.change}</span>
                                </p>
                            </div>
                        </div>
                    }
                })
                .collect_view()}
        </div>

        <section class="card">
            <div class="card-header">
                <h2>"Recent Documents"</h2>
                <a href="/documents" class="link-btn">"View all"</a>
            </div>
            <ul class="row-list">
                {recent
                    .into_iter()
                    .map(|doc| view! {
                        <li>
                            <div>
                                <p class="row-title">{doc.title}</p>
                                <p class="muted small">
                                    {format!("{} · {}", doc.kind.label(), format_date(doc.date))}
                                </p>
                            </div>
                            <span class=doc.status.css_class()>{doc.status.label()}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </section>
    }
}

//! Salesforce Integration page

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::config::use_config;
use crate::format::format_datetime;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data::{salesforce_connection, salesforce_objects, SALESFORCE_LINKS, SALESFORCE_SETTINGS};
use crate::models::{ConnectionStatus, SalesforceConnection};
use crate::notifications::{NewNotification, NotificationCategory};
use crate::store::{store_add_notification, use_app_store};
use crate::workflow::{delay, CancelToken};

fn status_line(conn: &SalesforceConnection) -> String {
    match conn.status {
        ConnectionStatus::Connected => format!("Connected to {} ({})", conn.org_name, conn.environment),
        ConnectionStatus::Disconnected => "Not connected to Salesforce".to_string(),
    }
}

fn toggled(status: ConnectionStatus) -> ConnectionStatus {
    match status {
        ConnectionStatus::Connected => ConnectionStatus::Disconnected,
        ConnectionStatus::Disconnected => ConnectionStatus::Connected,
    }
}

#[component]
pub fn SalesforcePage() -> impl IntoView {
    let sync_ms = use_config().simulation.salesforce_sync_ms;
    let store = use_app_store();

    let connection = RwSignal::new(salesforce_connection());
    let syncing = RwSignal::new(false);
    let connected = Memo::new(move |_| connection.with(|c| c.status == ConnectionStatus::Connected));

    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    let toggle_connection = move |_| {
        connection.update(|c| c.status = toggled(c.status));
        tracing::info!(connected = connected.get_untracked(), "salesforce connection toggled");
    };

    let sync = move |_| {
        if syncing.get_untracked() {
            return;
        }
        syncing.set(true);
        let token = token.clone();
        spawn_local(async move {
            if delay(sync_ms, &token).await.is_err() {
                tracing::debug!("salesforce sync abandoned");
                return;
            }
            connection.try_update(|c| c.last_sync = Utc::now());
            syncing.try_set(false);
            store_add_notification(
                &store,
                NewNotification::new(
                    NotificationCategory::System,
                    "Salesforce Sync Complete",
                    "Opportunities, accounts and contacts are up to date.",
                )
                .with_action_url("/salesforce"),
            );
        });
    };

    view! {
        <div class="page-header">
            <div>
                <h1>"Salesforce Integration"</h1>
                <p class="muted">"Sync opportunities and accounts with your Salesforce org"</p>
            </div>
        </div>

        <section class="card connection-card">
            <div class="card-header">
                <IconGlyph icon=Icon::Cloud />
                <div>
                    <h2>"Salesforce Connection"</h2>
                    <p class="muted">{move || connection.with(status_line)}</p>
                </div>
            </div>
            <div class="header-actions">
                <Show when=move || connected.get()>
                    <button type="button" class="btn" disabled=move || syncing.get() on:click=sync.clone()>
                        <IconGlyph icon=Icon::Refresh />
                        {move || if syncing.get() { "Syncing..." } else { "Sync Now" }}
                    </button>
                </Show>
                <button
                    type="button"
                    class="btn"
                    class:danger=move || connected.get()
                    class:primary=move || !connected.get()
                    on:click=toggle_connection
                >
                    {move || if connected.get() { "Disconnect" } else { "Connect to Salesforce" }}
                </button>
            </div>
        </section>

        <div class="card-grid">
            {salesforce_objects()
                .into_iter()
                .map(|object| view! {
                    <div class="card stat-card">
                        <IconGlyph icon=object.icon />
                        <dl>
                            <dt class="muted">{object.name}</dt>
                            <dd class="stat-value">{object.count}</dd>
                        </dl>
                        <p class="muted small">
                            "Last synced: "
                            {move || connection.with(|c| format_datetime(c.last_sync))}
                        </p>
                    </div>
                })
                .collect_view()}
        </div>

        <section class="card">
            <h2>"Integration Settings"</h2>
            <dl class="settings-list">
                {SALESFORCE_SETTINGS
                    .into_iter()
                    .map(|(label, value, action)| view! {
                        <div class="setting-row">
                            <dt>{label}</dt>
                            <dd>
                                <span>{value}</span>
                                <button
                                    type="button"
                                    class="link-btn"
                                    on:click=move |_| tracing::info!(setting = label, "salesforce setting action")
                                >
                                    {action}
                                </button>
                            </dd>
                        </div>
                    })
                    .collect_view()}
            </dl>
        </section>

        <section class="card">
            <h2>"Quick Links"</h2>
            <div class="quick-links">
                {SALESFORCE_LINKS
                    .into_iter()
                    .map(|(label, url, icon)| view! {
                        <a href=url target="_blank" rel="noopener noreferrer" class="quick-link">
                            <IconGlyph icon=icon />
                            <span>{label}</span>
                            <IconGlyph icon=Icon::ExternalLink />
                        </a>
                    })
                    .collect_view()}
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_line_follows_connection() {
        let mut conn = salesforce_connection();
        assert_eq!(status_line(&conn), "Not connected to Salesforce");
        conn.status = toggled(conn.status);
        assert_eq!(status_line(&conn), "Connected to Your Organization (Production)");
        assert_eq!(toggled(conn.status), ConnectionStatus::Disconnected);
    }
}

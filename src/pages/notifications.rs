//! Notifications page

use chrono::Utc;
use leptos::prelude::*;

use crate::format::{format_relative, pluralize};
use crate::icon::{Icon, IconGlyph};
use crate::notifications::{Notification, NotificationFilter, NotificationLog};
use crate::store::{
    store_delete_all_notifications, store_delete_notification, store_mark_all_read, store_mark_read,
    store_unread_count, use_app_store, AppStateStoreFields,
};

fn unread_summary(unread: usize, total: usize) -> String {
    format!(
        "You have {} ({} total).",
        pluralize(unread, "unread notification", "unread notifications"),
        total
    )
}

#[component]
pub fn NotificationsPage() -> impl IntoView {
    let store = use_app_store();
    let filter = RwSignal::new(NotificationFilter::All);

    let unread = Memo::new(move |_| store_unread_count(&store));
    let total = Memo::new(move |_| store.notifications().with(NotificationLog::len));
    let empty = Memo::new(move |_| store.notifications().with(NotificationLog::is_empty));
    let visible = Memo::new(move |_| {
        let f = filter.get();
        store.notifications().with(|log| {
            log.entries()
                .iter()
                .filter(|n| f.matches(n))
                .cloned()
                .collect::<Vec<_>>()
        })
    });

    view! {
        <div class="page-header">
            <div>
                <h1>"Notifications"</h1>
                <p class="muted">{move || unread_summary(unread.get(), total.get())}</p>
            </div>
            <div class="header-actions">
                <select
                    prop:value=move || filter.get().value()
                    on:change=move |ev| filter.set(NotificationFilter::from_value(&event_target_value(&ev)))
                >
                    {NotificationFilter::ALL
                        .into_iter()
                        .map(|f| view! { <option value=f.value()>{f.label()}</option> })
                        .collect_view()}
                </select>
                <button
                    type="button"
                    class="btn"
                    disabled=move || unread.get() == 0
                    on:click=move |_| store_mark_all_read(&store)
                >
                    <IconGlyph icon=Icon::Check />
                    "Mark all as read"
                </button>
                <button
                    type="button"
                    class="btn danger"
                    disabled=move || empty.get()
                    on:click=move |_| store_delete_all_notifications(&store)
                >
                    <IconGlyph icon=Icon::Trash />
                    "Clear all"
                </button>
            </div>
        </div>

        <section class="card">
            <Show
                when=move || visible.with(|v| !v.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        <IconGlyph icon=Icon::Bell />
                        <p>{move || filter.get().empty_message()}</p>
                    </div>
                }
            >
                <ul class="notification-list">
                    <For
                        each=move || visible.get()
                        key=|n| (n.id.clone(), n.read)
                        children=|n| view! { <NotificationRow notification=n /> }
                    />
                </ul>
            </Show>
        </section>
    }
}

#[component]
fn NotificationRow(notification: Notification) -> impl IntoView {
    let store = use_app_store();
    let (show_menu, set_show_menu) = signal(false);

    let id = StoredValue::new(notification.id.clone());
    let unread = !notification.read;
    let when = format_relative(notification.created_at, Utc::now());

    view! {
        <li class="notification-row" class:unread=unread>
            <span class=notification.category.css_class()>{notification.category.icon()}</span>
            <div class="notification-body">
                <p class="row-title">{notification.title}</p>
                <p class="muted">{notification.message}</p>
                <div class="notification-meta">
                    <span class="muted small">{when}</span>
                    {notification.action_url.map(|url| view! {
                        <a href=url class="link-btn">"View details"</a>
                    })}
                </div>
            </div>
            <div class="menu-anchor">
                <button type="button" class="icon-btn" on:click=move |_| set_show_menu.update(|v| *v = !*v)>
                    <IconGlyph icon=Icon::Menu />
                </button>
                <Show when=move || show_menu.get()>
                    <div class="dropdown">
                        {unread.then(|| view! {
                            <button
                                type="button"
                                on:click=move |_| {
                                    set_show_menu.set(false);
                                    id.with_value(|id| store_mark_read(&store, id));
                                }
                            >
                                "Mark as read"
                            </button>
                        })}
                        <button
                            type="button"
                            class="danger"
                            on:click=move |_| id.with_value(|id| store_delete_notification(&store, id))
                        >
                            "Delete"
                        </button>
                    </div>
                </Show>
            </div>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unread_summary() {
        assert_eq!(unread_summary(0, 0), "You have 0 unread notifications (0 total).");
        assert_eq!(unread_summary(1, 3), "You have 1 unread notification (3 total).");
        assert_eq!(unread_summary(4, 4), "You have 4 unread notifications (4 total).");
    }

    #[test]
    fn test_filter_select_value_maps_back() {
        for f in NotificationFilter::ALL {
            assert_eq!(NotificationFilter::from_value(f.value()), f);
        }
        assert_eq!(NotificationFilter::from_value("bogus"), NotificationFilter::All);
    }
}

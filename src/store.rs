//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::mock_data;
use crate::notifications::{NewNotification, NotificationLog};
use crate::theme;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Notification log, most recent first
    pub notifications: NotificationLog,
    /// Dark theme flag, mirrored to local storage
    pub dark_mode: bool,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            notifications: NotificationLog::from_records(mock_data::seed_notifications()),
            dark_mode: theme::initial_dark_mode(),
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Prepend a notification; returns its id
pub fn store_add_notification(store: &AppStore, input: NewNotification) -> String {
    let id = store.notifications().write().add(input);
    tracing::debug!(%id, "notification added");
    id
}

pub fn store_mark_read(store: &AppStore, id: &str) {
    store.notifications().write().mark_read(id);
    tracing::debug!(%id, "notification marked read");
}

pub fn store_mark_all_read(store: &AppStore) {
    store.notifications().write().mark_all_read();
    tracing::debug!("all notifications marked read");
}

pub fn store_delete_notification(store: &AppStore, id: &str) {
    store.notifications().write().delete(id);
    tracing::debug!(%id, "notification deleted");
}

pub fn store_delete_all_notifications(store: &AppStore) {
    store.notifications().write().delete_all();
    tracing::debug!("all notifications deleted");
}

/// Derived on every read
pub fn store_unread_count(store: &AppStore) -> usize {
    store.notifications().with(|log| log.unread_count())
}

/// Flip the theme and persist it
pub fn store_toggle_dark_mode(store: &AppStore) {
    let dark = !store.dark_mode().get_untracked();
    store_set_dark_mode(store, dark);
}

pub fn store_set_dark_mode(store: &AppStore, dark: bool) {
    store.dark_mode().set(dark);
    theme::persist(dark);
    tracing::debug!(dark, "theme changed");
}

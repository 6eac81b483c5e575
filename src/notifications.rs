//! Notification Log
//!
//! The ordered notification collection and its mutation surface. Plain Rust,
//! wrapped by the reactive app store (see `store.rs`).
//!
//! Invariants:
//! - ids are generated here and unique within the log
//! - `created_at` is assigned here at insertion time
//! - new entries are prepended; nothing else reorders the log
//! - `read` only ever goes from false to true

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationCategory {
    Document,
    System,
    Warning,
    Success,
}

impl NotificationCategory {
    pub fn icon(self) -> &'static str {
        match self {
            NotificationCategory::Document => "📄",
            NotificationCategory::System => "🔔",
            NotificationCategory::Warning => "⚠",
            NotificationCategory::Success => "✔",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            NotificationCategory::Document => "notif-icon document",
            NotificationCategory::System => "notif-icon system",
            NotificationCategory::Warning => "notif-icon warning",
            NotificationCategory::Success => "notif-icon success",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub created_at: DateTime<Utc>,
    pub read: bool,
    pub action_url: Option<String>,
}

/// Caller-supplied part of a notification
#[derive(Debug, Clone, PartialEq)]
pub struct NewNotification {
    pub title: String,
    pub message: String,
    pub category: NotificationCategory,
    pub action_url: Option<String>,
}

impl NewNotification {
    pub fn new(category: NotificationCategory, title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
            category,
            action_url: None,
        }
    }

    pub fn with_action_url(mut self, url: impl Into<String>) -> Self {
        self.action_url = Some(url.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationLog {
    entries: Vec<Notification>,
}

impl NotificationLog {
    /// Start from existing records (seed data), most recent first
    pub fn from_records(entries: Vec<Notification>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Notification] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Notification> {
        self.entries.iter().find(|n| n.id == id)
    }

    pub fn unread_count(&self) -> usize {
        self.entries.iter().filter(|n| !n.read).count()
    }

    /// Insert at the head. Returns the generated id.
    pub fn add(&mut self, input: NewNotification) -> String {
        let id = self.fresh_id();
        self.entries.insert(
            0,
            Notification {
                id: id.clone(),
                title: input.title,
                message: input.message,
                category: input.category,
                created_at: Utc::now(),
                read: false,
                action_url: input.action_url,
            },
        );
        id
    }

    /// No-op for unknown ids
    pub fn mark_read(&mut self, id: &str) {
        if let Some(entry) = self.entries.iter_mut().find(|n| n.id == id) {
            entry.read = true;
        }
    }

    pub fn mark_all_read(&mut self) {
        for entry in &mut self.entries {
            entry.read = true;
        }
    }

    /// No-op for unknown ids
    pub fn delete(&mut self, id: &str) {
        self.entries.retain(|n| n.id != id);
    }

    pub fn delete_all(&mut self) {
        self.entries.clear();
    }

    fn fresh_id(&self) -> String {
        loop {
            let id = Uuid::new_v4().to_string();
            if self.get(&id).is_none() {
                return id;
            }
        }
    }
}

/// Notifications page filter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NotificationFilter {
    #[default]
    All,
    Unread,
    Document,
    System,
}

impl NotificationFilter {
    pub const ALL: [NotificationFilter; 4] = [
        NotificationFilter::All,
        NotificationFilter::Unread,
        NotificationFilter::Document,
        NotificationFilter::System,
    ];

    pub fn value(self) -> &'static str {
        match self {
            NotificationFilter::All => "all",
            NotificationFilter::Unread => "unread",
            NotificationFilter::Document => "document",
            NotificationFilter::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            NotificationFilter::All => "All notifications",
            NotificationFilter::Unread => "Unread",
            NotificationFilter::Document => "Documents",
            NotificationFilter::System => "System",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|f| f.value() == value)
            .unwrap_or_default()
    }

    pub fn matches(self, n: &Notification) -> bool {
        match self {
            NotificationFilter::All => true,
            NotificationFilter::Unread => !n.read,
            NotificationFilter::Document => n.category == NotificationCategory::Document,
            NotificationFilter::System => n.category == NotificationCategory::System,
        }
    }

    pub fn empty_message(self) -> String {
        match self {
            NotificationFilter::All => "You're all caught up!".to_string(),
            other => format!("No {} notifications at the moment.", other.value()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn input(title: &str, category: NotificationCategory) -> NewNotification {
        NewNotification::new(category, title, format!("message for {}", title))
    }

    fn titles(log: &NotificationLog) -> Vec<&str> {
        log.entries().iter().map(|n| n.title.as_str()).collect()
    }

    #[test]
    fn test_add_generates_unique_unread_entries() {
        let mut log = NotificationLog::default();
        for i in 0..200 {
            log.add(input(&format!("n{}", i), NotificationCategory::System));
        }
        let ids: HashSet<_> = log.entries().iter().map(|n| n.id.clone()).collect();
        assert_eq!(ids.len(), 200);
        assert!(log.entries().iter().all(|n| !n.read));
        assert_eq!(log.unread_count(), 200);
    }

    #[test]
    fn test_example_sequence() {
        let mut log = NotificationLog::default();
        let a = log.add(input("A", NotificationCategory::System));
        assert_eq!(log.len(), 1);
        assert_eq!(log.unread_count(), 1);

        let b = log.add(input("B", NotificationCategory::Document));
        assert_eq!(titles(&log), vec!["B", "A"]);
        assert_eq!(log.unread_count(), 2);

        log.mark_read(&a);
        assert_eq!(log.unread_count(), 1);

        log.mark_all_read();
        assert_eq!(log.unread_count(), 0);

        log.delete(&b);
        assert_eq!(titles(&log), vec!["A"]);
    }

    #[test]
    fn test_mark_read_is_idempotent() {
        let mut log = NotificationLog::default();
        let id = log.add(input("A", NotificationCategory::Warning));
        log.add(input("B", NotificationCategory::Warning));

        log.mark_read(&id);
        let once = log.clone();
        log.mark_read(&id);
        assert_eq!(log, once);
        assert_eq!(log.unread_count(), 1);
    }

    #[test]
    fn test_unknown_ids_are_ignored() {
        let mut log = NotificationLog::default();
        log.add(input("A", NotificationCategory::Success));
        log.add(input("B", NotificationCategory::Document));
        let before = log.clone();

        log.mark_read("nonexistent-id");
        assert_eq!(log, before);
        log.delete("nonexistent-id");
        assert_eq!(log, before);
    }

    #[test]
    fn test_delete_all() {
        let mut log = NotificationLog::default();
        log.add(input("A", NotificationCategory::System));
        log.add(input("B", NotificationCategory::System));
        log.delete_all();
        assert!(log.is_empty());
        assert_eq!(log.unread_count(), 0);
    }

    #[test]
    fn test_unread_count_tracks_every_operation() {
        let mut log = NotificationLog::default();
        let check = |log: &NotificationLog| {
            let expected = log.entries().iter().filter(|n| !n.read).count();
            assert_eq!(log.unread_count(), expected);
        };

        let mut ids = Vec::new();
        for i in 0..6 {
            ids.push(log.add(input(&format!("n{}", i), NotificationCategory::Document)));
            check(&log);
        }
        log.mark_read(&ids[1]);
        check(&log);
        log.delete(&ids[1]);
        check(&log);
        log.delete(&ids[4]);
        check(&log);
        log.mark_read(&ids[0]);
        check(&log);
        log.add(input("late", NotificationCategory::Success));
        check(&log);
        assert_eq!(log.unread_count(), 4);
    }

    #[test]
    fn test_seeded_read_flags_survive() {
        let mut log = NotificationLog::from_records(vec![Notification {
            id: "2".to_string(),
            title: "Seed".to_string(),
            message: String::new(),
            category: NotificationCategory::Success,
            created_at: Utc::now(),
            read: true,
            action_url: None,
        }]);
        let id = log.add(input("fresh", NotificationCategory::Document));
        assert_ne!(id, "2");
        assert_eq!(titles(&log), vec!["fresh", "Seed"]);
        assert_eq!(log.unread_count(), 1);
    }

    #[test]
    fn test_filters() {
        let mut log = NotificationLog::default();
        let doc = log.add(input("doc", NotificationCategory::Document));
        log.add(input("sys", NotificationCategory::System));
        log.add(input("warn", NotificationCategory::Warning));
        log.mark_read(&doc);

        let count = |f: NotificationFilter| log.entries().iter().filter(|n| f.matches(n)).count();
        assert_eq!(count(NotificationFilter::All), 3);
        assert_eq!(count(NotificationFilter::Unread), 2);
        assert_eq!(count(NotificationFilter::Document), 1);
        assert_eq!(count(NotificationFilter::System), 1);

        assert_eq!(NotificationFilter::from_value("unread"), NotificationFilter::Unread);
        assert_eq!(NotificationFilter::from_value("bogus"), NotificationFilter::All);
        assert_eq!(NotificationFilter::System.empty_message(), "No system notifications at the moment.");
    }
}

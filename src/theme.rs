//! Theme
//!
//! Dark/light flag persistence and the `dark` class on the root element.

use gloo_storage::errors::StorageError;
use gloo_storage::{LocalStorage, Storage};

pub const THEME_STORAGE_KEY: &str = "bid_platform_dark_mode";

/// Settings page theme selector
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ThemeChoice {
    Light,
    Dark,
    System,
}

impl ThemeChoice {
    pub const ALL: [ThemeChoice; 3] = [ThemeChoice::Light, ThemeChoice::Dark, ThemeChoice::System];

    pub fn value(self) -> &'static str {
        match self {
            ThemeChoice::Light => "light",
            ThemeChoice::Dark => "dark",
            ThemeChoice::System => "system",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ThemeChoice::Light => "Light",
            ThemeChoice::Dark => "Dark",
            ThemeChoice::System => "System",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }

    /// Dark flag for this choice, given the OS preference
    pub fn resolve(self, system_prefers_dark: bool) -> bool {
        match self {
            ThemeChoice::Light => false,
            ThemeChoice::Dark => true,
            ThemeChoice::System => system_prefers_dark,
        }
    }

    pub fn from_flag(dark: bool) -> Self {
        if dark {
            ThemeChoice::Dark
        } else {
            ThemeChoice::Light
        }
    }
}

/// Stored flag, then the OS preference, then light
pub fn initial_dark_mode() -> bool {
    match LocalStorage::get::<bool>(THEME_STORAGE_KEY) {
        Ok(dark) => dark,
        Err(StorageError::KeyNotFound(_)) => system_prefers_dark(),
        Err(e) => {
            tracing::warn!("theme flag unreadable: {}", e);
            system_prefers_dark()
        }
    }
}

pub fn system_prefers_dark() -> bool {
    web_sys::window()
        .and_then(|w| w.match_media("(prefers-color-scheme: dark)").ok().flatten())
        .map(|mq| mq.matches())
        .unwrap_or(false)
}

pub fn persist(dark: bool) {
    if let Err(e) = LocalStorage::set(THEME_STORAGE_KEY, dark) {
        tracing::warn!("failed to persist theme: {}", e);
    }
}

/// Toggle the `dark` class on `<html>`
pub fn apply_dark_class(dark: bool) {
    let Some(root) = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element())
    else {
        tracing::warn!("no document element; theme class not applied");
        return;
    };
    if let Err(e) = root.class_list().toggle_with_force("dark", dark) {
        tracing::warn!("failed to set theme class: {:?}", e);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_choice() {
        assert!(!ThemeChoice::Light.resolve(true));
        assert!(ThemeChoice::Dark.resolve(false));
        assert!(ThemeChoice::System.resolve(true));
        assert!(!ThemeChoice::System.resolve(false));
    }

    #[test]
    fn test_choice_values() {
        assert_eq!(ThemeChoice::from_value("system"), Some(ThemeChoice::System));
        assert_eq!(ThemeChoice::from_value("sepia"), None);
        assert_eq!(ThemeChoice::from_flag(true), ThemeChoice::Dark);
    }
}

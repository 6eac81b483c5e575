//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

use crate::models::{ChatDocument, ParsedPayload, UploadPayload};

/// Transient payload carried across one navigation
#[derive(Debug, Clone, PartialEq)]
pub enum Handoff {
    /// Upload -> Document Parsing
    Upload(UploadPayload),
    /// Document Parsing -> Proposal Generation
    Parsed(ParsedPayload),
    /// Knowledge Store -> Chat
    ChatDocument(ChatDocument),
}

impl Handoff {
    fn kind(&self) -> &'static str {
        match self {
            Handoff::Upload(_) => "upload",
            Handoff::Parsed(_) => "parsed",
            Handoff::ChatDocument(_) => "chat-document",
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Pending navigation payload, consumed by the receiving page
    handoff: RwSignal<Option<Handoff>>,
    /// Navbar search text
    pub search: RwSignal<String>,
}

impl AppContext {
    pub fn new() -> Self {
        Self {
            handoff: RwSignal::new(None),
            search: RwSignal::new(String::new()),
        }
    }

    /// Leave a payload for the next page; replaces any unconsumed one
    pub fn hand_off(&self, payload: Handoff) {
        tracing::info!(kind = payload.kind(), "navigation handoff");
        self.handoff.set(Some(payload));
    }

    /// Take the pending payload if `pick` accepts it. Untracked: reading it
    /// must not subscribe the caller.
    fn take<T>(&self, pick: impl Fn(&Handoff) -> Option<T>) -> Option<T> {
        let picked = self.handoff.with_untracked(|h| h.as_ref().and_then(&pick));
        if picked.is_some() {
            self.handoff.set(None);
        }
        picked
    }

    pub fn take_upload(&self) -> Option<UploadPayload> {
        self.take(|h| match h {
            Handoff::Upload(p) => Some(p.clone()),
            _ => None,
        })
    }

    pub fn take_parsed(&self) -> Option<ParsedPayload> {
        self.take(|h| match h {
            Handoff::Parsed(p) => Some(p.clone()),
            _ => None,
        })
    }

    pub fn take_chat_document(&self) -> Option<ChatDocument> {
        self.take(|h| match h {
            Handoff::ChatDocument(d) => Some(d.clone()),
            _ => None,
        })
    }
}

impl Default for AppContext {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_app_context() -> AppContext {
    expect_context::<AppContext>()
}

//! Document Chat page

use chrono::Utc;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::ChatHistorySidebar;
use crate::config::use_config;
use crate::context::use_app_context;
use crate::icon::{Icon, IconGlyph};
use crate::mock_data::{CHAT_GREETING, CHAT_REPLY};
use crate::models::{ChatMessage, Sender};
use crate::workflow::{delay, CancelToken};

fn message(sender: Sender, content: &str) -> ChatMessage {
    ChatMessage {
        id: uuid::Uuid::new_v4().to_string(),
        content: content.to_string(),
        sender,
        timestamp: Utc::now(),
    }
}

/// User message for `input`; blank input sends nothing
fn user_message(input: &str) -> Option<ChatMessage> {
    let trimmed = input.trim();
    (!trimmed.is_empty()).then(|| message(Sender::User, trimmed))
}

fn greeting() -> Vec<ChatMessage> {
    vec![message(Sender::Assistant, CHAT_GREETING)]
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let reply_ms = use_config().simulation.chat_reply_ms;
    let ctx = use_app_context();

    let document = ctx.take_chat_document();
    if let Some(doc) = &document {
        tracing::info!(document = doc.id, "chat opened for knowledge document");
    }

    let messages = RwSignal::new(greeting());
    let input = RwSignal::new(String::new());
    let history_open = RwSignal::new(true);

    let token = CancelToken::new();
    {
        let token = token.clone();
        on_cleanup(move || token.cancel());
    }

    let send = move || {
        let Some(msg) = user_message(&input.get_untracked()) else {
            return;
        };
        messages.update(|list| list.push(msg));
        input.set(String::new());

        let token = token.clone();
        spawn_local(async move {
            if delay(reply_ms, &token).await.is_ok() {
                messages.try_update(|list| list.push(message(Sender::Assistant, CHAT_REPLY)));
            }
        });
    };
    let send_click = send.clone();

    view! {
        <div class="chat-page" class:with-history=move || history_open.get()>
            <div class="page-header">
                <div>
                    <h1>"Document Chat"</h1>
                    <p class="muted">"Ask questions about your documents and get instant answers"</p>
                </div>
            </div>

            {document.map(|doc| view! {
                <div class="alert info">
                    <IconGlyph icon=Icon::FileText />
                    <span>{format!("Chatting about: {}", doc.title)}</span>
                </div>
            })}

            <section class="card chat-panel">
                <div class="chat-messages">
                    <For
                        each=move || messages.get()
                        key=|m| m.id.clone()
                        children=|m| {
                            let is_user = m.sender == Sender::User;
                            view! {
                                <div class="chat-message" class:user=is_user>
                                    <span class="chat-avatar">
                                        <IconGlyph icon=if is_user { Icon::User } else { Icon::Bot } />
                                    </span>
                                    <div class="chat-bubble">{m.content}</div>
                                </div>
                            }
                        }
                    />
                </div>
                <div class="chat-input-row">
                    <button type="button" class="btn" on:click=|_| tracing::info!("attach document requested")>
                        <IconGlyph icon=Icon::Link />
                        "Attach Document"
                    </button>
                    <input
                        type="text"
                        placeholder="Type your message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=move |ev| {
                            if ev.key() == "Enter" {
                                send();
                            }
                        }
                    />
                    <button type="button" class="btn primary" on:click=move |_| send_click()>
                        <IconGlyph icon=Icon::Send />
                    </button>
                </div>
            </section>

            <ChatHistorySidebar
                is_open=history_open
                on_toggle=move |_: ()| history_open.update(|v| *v = !*v)
                on_new_chat=move |_: ()| messages.set(greeting())
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_input_sends_nothing() {
        assert!(user_message("").is_none());
        assert!(user_message("   \n").is_none());
    }

    #[test]
    fn test_user_message_is_trimmed() {
        let msg = user_message("  What is the deadline?  ");
        assert_eq!(msg.as_ref().map(|m| m.content.as_str()), Some("What is the deadline?"));
        assert_eq!(msg.map(|m| m.sender), Some(Sender::User));
        assert_eq!(greeting()[0].sender, Sender::Assistant);
    }
}

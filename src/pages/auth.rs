//! Login, Register and Forgot Password pages
//!
//! Rendered without sidebar and navbar. There is no backend: a form that
//! passes validation logs the attempt and moves on.

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::icon::{Icon, IconGlyph};
use crate::validation::{check_email, check_login, check_registration, MIN_PASSWORD_LEN};

/// Centered card shared by the auth pages
#[component]
fn AuthCard(title: &'static str, subtitle: &'static str, error: RwSignal<Option<String>>, children: Children) -> impl IntoView {
    view! {
        <main class="auth-container">
            <div class="auth-card">
                <div class="auth-header">
                    <IconGlyph icon=Icon::FileText />
                    <h1 class="auth-title">{title}</h1>
                    <p class="auth-subtitle muted">{subtitle}</p>
                </div>

                <Show when=move || error.with(Option::is_some)>
                    <div class="alert error">{move || error.get().unwrap_or_default()}</div>
                </Show>

                {children()}
            </div>
        </main>
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let navigate = use_navigate();

    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let email_val = email.get_untracked();
        match check_login(&email_val, &password.get_untracked()) {
            Ok(()) => {
                error.set(None);
                tracing::info!(email = %email_val.trim(), "signed in");
                navigate("/", Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthCard title="Welcome Back" subtitle="Sign in to continue" error=error>
            <form on:submit=on_submit class="auth-form">
                <div class="auth-input-group">
                    <label class="auth-label">"Email"</label>
                    <input
                        type="email"
                        prop:value=move || email.get()
                        on:input=move |ev| email.set(event_target_value(&ev))
                        placeholder="you@example.com"
                    />
                </div>
                <div class="auth-input-group">
                    <label class="auth-label">"Password"</label>
                    <input
                        type="password"
                        prop:value=move || password.get()
                        on:input=move |ev| password.set(event_target_value(&ev))
                        placeholder="••••••••"
                    />
                </div>
                <div class="auth-row">
                    <a href="/forgot-password" class="auth-link">"Forgot your password?"</a>
                </div>
                <button type="submit" class="btn primary full">"Sign In"</button>
            </form>
            <div class="auth-footer">
                "Don't have an account? "
                <a href="/register" class="auth-link">"Sign up"</a>
            </div>
        </AuthCard>
    }
}

#[component]
pub fn RegisterPage() -> impl IntoView {
    let navigate = use_navigate();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let result = check_registration(
            &name.get_untracked(),
            &email.get_untracked(),
            &password.get_untracked(),
            &confirm.get_untracked(),
        );
        match result {
            Ok(()) => {
                error.set(None);
                tracing::info!(email = %email.get_untracked().trim(), "account registered");
                navigate("/", Default::default());
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    let field = move |label: &'static str, kind: &'static str, value: RwSignal<String>| {
        view! {
            <div class="auth-input-group">
                <label class="auth-label">{label}</label>
                <input
                    type=kind
                    prop:value=move || value.get()
                    on:input=move |ev| value.set(event_target_value(&ev))
                />
            </div>
        }
    };

    view! {
        <AuthCard title="Create Account" subtitle="Sign up to start preparing bids" error=error>
            <form on:submit=on_submit class="auth-form">
                {field("Full Name", "text", name)}
                {field("Email", "email", email)}
                {field("Password", "password", password)}
                <p class="muted small">{format!("Minimum {} characters", MIN_PASSWORD_LEN)}</p>
                {field("Confirm Password", "password", confirm)}
                <button type="submit" class="btn primary full">"Create Account"</button>
            </form>
            <div class="auth-footer">
                "Already have an account? "
                <a href="/login" class="auth-link">"Sign in"</a>
            </div>
        </AuthCard>
    }
}

#[component]
pub fn ForgotPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
    let error = RwSignal::new(Option::<String>::None);
    let sent = RwSignal::new(false);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match check_email(&email.get_untracked()) {
            Ok(()) => {
                error.set(None);
                sent.set(true);
                tracing::info!(email = %email.get_untracked().trim(), "password reset requested");
            }
            Err(e) => error.set(Some(e.to_string())),
        }
    };

    view! {
        <AuthCard title="Reset Password" subtitle="We'll email you a link to reset your password" error=error>
            <Show
                when=move || sent.get()
                fallback=move || view! {
                    <form on:submit=on_submit class="auth-form">
                        <div class="auth-input-group">
                            <label class="auth-label">"Email"</label>
                            <input
                                type="email"
                                prop:value=move || email.get()
                                on:input=move |ev| email.set(event_target_value(&ev))
                                placeholder="you@example.com"
                            />
                        </div>
                        <button type="submit" class="btn primary full">"Send Reset Link"</button>
                    </form>
                }
            >
                <div class="alert success">
                    <IconGlyph icon=Icon::Mail />
                    {move || format!("If an account exists for {}, a reset link is on its way.", email.get().trim())}
                </div>
            </Show>
            <div class="auth-footer">
                <a href="/login" class="auth-link">"Back to sign in"</a>
            </div>
        </AuthCard>
    }
}

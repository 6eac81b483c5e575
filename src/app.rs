//! Bid Platform Frontend App
//!
//! Root component: context providers, theme sync, router and the
//! sidebar/navbar shell.

use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};
use reactive_stores::Store;

use crate::components::{DarkModeToggle, Navbar, Sidebar};
use crate::config::AppConfig;
use crate::context::AppContext;
use crate::pages::*;
use crate::store::{AppState, AppStateStoreFields};
use crate::theme;

/// Paths rendered without sidebar and navbar
pub const AUTH_PATHS: [&str; 3] = ["/login", "/register", "/forgot-password"];

pub fn is_auth_path(path: &str) -> bool {
    let trimmed = path.trim_end_matches('/');
    AUTH_PATHS.contains(&trimmed)
}

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    tracing::debug!(?config, "config loaded");
    provide_context(config);

    let store = Store::new(AppState::new());
    provide_context(store);
    provide_context(AppContext::new());

    // Keep the root `dark` class in sync with the store
    Effect::new(move |_| {
        theme::apply_dark_class(store.dark_mode().get());
    });

    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=DashboardPage />
                    <Route path=path!("/documents") view=DocumentsPage />
                    <Route path=path!("/upload") view=UploadPage />
                    <Route path=path!("/document-parsing") view=DocumentParsingPage />
                    <Route path=path!("/document-validation") view=DocumentValidationPage />
                    <Route path=path!("/proposal-generation") view=ProposalGenerationPage />
                    <Route path=path!("/templates") view=TemplatesPage />
                    <Route path=path!("/knowledge-store") view=KnowledgeStorePage />
                    <Route path=path!("/editor") view=EditorPage />
                    <Route path=path!("/file-explorer") view=FileExplorerPage />
                    <Route path=path!("/chat") view=ChatPage />
                    <Route path=path!("/team") view=TeamPage />
                    <Route path=path!("/notifications") view=NotificationsPage />
                    <Route path=path!("/settings") view=SettingsPage />
                    <Route path=path!("/help") view=HelpPage />
                    <Route path=path!("/activity") view=ActivityLogPage />
                    <Route path=path!("/profile") view=ProfilePage />
                    <Route path=path!("/salesforce") view=SalesforcePage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/register") view=RegisterPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                </Routes>
            </Shell>
        </Router>
    }
}

/// Sidebar + navbar chrome, hidden on auth pages
#[component]
fn Shell(children: Children) -> impl IntoView {
    let location = use_location();
    let with_chrome = Memo::new(move |_| !is_auth_path(&location.pathname.get()));

    view! {
        <div class="app-layout" class:bare=move || !with_chrome.get()>
            <Show when=move || with_chrome.get()>
                <Sidebar />
            </Show>
            <div class="app-main">
                <Show when=move || with_chrome.get()>
                    <Navbar />
                </Show>
                <main class="page">{children()}</main>
            </div>
            <DarkModeToggle />
        </div>
    }
}

/// 404 Not Found page
#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="not-found">
            <h1>"404"</h1>
            <p>"Page not found"</p>
            <a href="/" class="btn primary">"Go Home"</a>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_paths() {
        assert!(is_auth_path("/login"));
        assert!(is_auth_path("/register/"));
        assert!(is_auth_path("/forgot-password"));
        assert!(!is_auth_path("/"));
        assert!(!is_auth_path("/login-help"));
        assert!(!is_auth_path("/settings"));
    }
}

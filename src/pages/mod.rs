//! Pages
//!
//! One routed view per module.

mod activity_log;
mod auth;
mod chat;
mod dashboard;
mod document_parsing;
mod document_validation;
mod documents;
mod editor;
mod file_explorer;
mod help;
mod knowledge_store;
mod notifications;
mod profile;
mod proposal_generation;
mod salesforce;
mod settings;
mod team;
mod templates;
mod upload;

pub use activity_log::ActivityLogPage;
pub use auth::{ForgotPasswordPage, LoginPage, RegisterPage};
pub use chat::ChatPage;
pub use dashboard::DashboardPage;
pub use document_parsing::DocumentParsingPage;
pub use document_validation::DocumentValidationPage;
pub use documents::DocumentsPage;
pub use editor::EditorPage;
pub use file_explorer::FileExplorerPage;
pub use help::HelpPage;
pub use knowledge_store::KnowledgeStorePage;
pub use notifications::NotificationsPage;
pub use profile::ProfilePage;
pub use proposal_generation::ProposalGenerationPage;
pub use salesforce::SalesforcePage;
pub use settings::SettingsPage;
pub use team::TeamPage;
pub use templates::TemplatesPage;
pub use upload::UploadPage;

//! UI Components
//!
//! Reusable Leptos components.

mod additional_info;
mod chat_history_sidebar;
mod dark_mode_toggle;
mod delete_confirm_button;
mod document_card;
mod drop_zone;
mod navbar;
mod parsing_progress;
mod sidebar;
mod template_editor;
mod upload_modal;
mod validation_references;
mod validation_report;

pub use additional_info::AdditionalInfoForm;
pub use chat_history_sidebar::ChatHistorySidebar;
pub use dark_mode_toggle::DarkModeToggle;
pub use delete_confirm_button::DeleteConfirmButton;
pub use document_card::DocumentCard;
pub use drop_zone::{FileDropZone, PickedFile};
pub use navbar::Navbar;
pub use parsing_progress::ParsingProgress;
pub use sidebar::Sidebar;
pub use template_editor::TemplateEditor;
pub use upload_modal::{KnowledgeUpload, UploadModal};
pub use validation_references::ValidationReferences;
pub use validation_report::ValidationReport;

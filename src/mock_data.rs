//! Mock Data
//!
//! Hard-coded fixtures standing in for backend responses.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use serde_json::json;

use crate::icon::Icon;
use crate::models::*;
use crate::notifications::{Notification, NotificationCategory};
use crate::workflow::Step;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap_or_default()
}

fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, mo, d, h, mi, 0).single().unwrap_or_default()
}

const AVATAR_JOHN: &str = "https://images.unsplash.com/photo-1472099645785-5658abf4ff4e?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_JANE: &str = "https://images.unsplash.com/photo-1494790108377-be9c29b29330?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";
const AVATAR_MICHAEL: &str = "https://images.unsplash.com/photo-1519244703995-f4e0f30006d5?auto=format&fit=facearea&facepad=2&w=256&h=256&q=80";

// ========================
// Notifications
// ========================

pub fn seed_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "1".to_string(),
            title: "New RFP Assignment".to_string(),
            message: "You have been assigned as the creator for RFP-2024-001".to_string(),
            category: NotificationCategory::Document,
            created_at: ts(2024, 3, 15, 10, 30),
            read: false,
            action_url: Some("/document-parsing/RFP-2024-001".to_string()),
        },
        Notification {
            id: "2".to_string(),
            title: "Document Validation Complete".to_string(),
            message: "Validation completed for \"Enterprise Software Proposal\". No issues found.".to_string(),
            category: NotificationCategory::Success,
            created_at: ts(2024, 3, 15, 9, 15),
            read: true,
            action_url: Some("/document-validation/ESW-2024-002".to_string()),
        },
    ]
}

// ========================
// Dashboard & documents
// ========================

pub fn dashboard_stats() -> Vec<Stat> {
    vec![
        Stat { name: "Total Documents", value: "405", icon: Icon::FileText, change: "+4.75%", trend: Trend::Positive },
        Stat { name: "Active Projects", value: "12", icon: Icon::Chart, change: "+54.02%", trend: Trend::Positive },
        Stat { name: "Team Members", value: "24", icon: Icon::Users, change: "+12.30%", trend: Trend::Positive },
        Stat { name: "Pending Reviews", value: "6", icon: Icon::Alert, change: "-8.44%", trend: Trend::Negative },
    ]
}

pub fn recent_documents() -> Vec<RecentDocument> {
    vec![
        RecentDocument {
            id: 1,
            title: "Enterprise Software RFP",
            kind: DocumentKind::Rfp,
            status: ReviewStatus::InProgress,
            date: date(2024, 3, 10),
        },
        RecentDocument {
            id: 2,
            title: "Cloud Infrastructure Proposal",
            kind: DocumentKind::Proposal,
            status: ReviewStatus::UnderReview,
            date: date(2024, 3, 9),
        },
        RecentDocument {
            id: 3,
            title: "Mobile App Development RFQ",
            kind: DocumentKind::Rfq,
            status: ReviewStatus::Approved,
            date: date(2024, 3, 8),
        },
    ]
}

pub fn documents() -> Vec<DocumentRecord> {
    vec![
        DocumentRecord {
            id: "1".to_string(),
            title: "Enterprise Software RFP".to_string(),
            kind: DocumentKind::Rfp,
            status: DocumentStatus::Draft,
            created_at: ts(2024, 3, 10, 10, 0),
            updated_at: ts(2024, 3, 10, 10, 0),
            creator: UserRef {
                id: "1".to_string(),
                name: "John Doe".to_string(),
                email: "john@example.com".to_string(),
                role: UserRole::Creator,
                avatar: AVATAR_JOHN.to_string(),
            },
            file_size: "2.5 MB".to_string(),
            progress: 75,
        },
        DocumentRecord {
            id: "2".to_string(),
            title: "Cloud Infrastructure Proposal".to_string(),
            kind: DocumentKind::Proposal,
            status: DocumentStatus::Submitted,
            created_at: ts(2024, 3, 9, 15, 30),
            updated_at: ts(2024, 3, 9, 15, 30),
            creator: UserRef {
                id: "2".to_string(),
                name: "Jane Smith".to_string(),
                email: "jane@example.com".to_string(),
                role: UserRole::Creator,
                avatar: AVATAR_JANE.to_string(),
            },
            file_size: "1.8 MB".to_string(),
            progress: 100,
        },
    ]
}

// ========================
// Parsing
// ========================

pub const STEP_DOCUMENT_PARSING: &str = "document-parsing";
pub const STEP_PROJECT_ANALYSIS: &str = "project-analysis";
pub const STEP_HISTORICAL_DATA: &str = "historical-data";
pub const STEP_VALIDATION: &str = "validation";

pub fn parsing_steps() -> Vec<Step<ParseOutcome>> {
    vec![
        Step::new(
            STEP_DOCUMENT_PARSING,
            "Document Parsing",
            "Extracting content from uploaded documents using LangChain parser",
        ),
        Step::new(
            STEP_PROJECT_ANALYSIS,
            "Project Analysis",
            "Identifying project type, domain, and complexity",
        ),
        Step::new(
            STEP_HISTORICAL_DATA,
            "Historical Data Analysis",
            "Finding similar projects from knowledge store",
        ),
        Step::new(
            STEP_VALIDATION,
            "Validation",
            "Validating project complexity and challenges",
        ),
    ]
}

pub fn project_analysis() -> ProjectAnalysis {
    ProjectAnalysis {
        project_type: "Software Development".to_string(),
        domain: "Healthcare".to_string(),
        complexity: Complexity::High,
        challenges: vec![
            "Integration with legacy systems".to_string(),
            "HIPAA compliance requirements".to_string(),
            "Real-time data processing".to_string(),
        ],
    }
}

pub fn similar_documents() -> Vec<SimilarDocument> {
    vec![
        SimilarDocument { id: "1".to_string(), name: "Healthcare System RFP 2022".to_string(), similarity: 85 },
        SimilarDocument { id: "2".to_string(), name: "Medical Data Platform Proposal".to_string(), similarity: 72 },
    ]
}

/// Mock result of a parsing step; unknown steps are an error
pub fn parse_step_result(step_id: &str) -> Result<Option<ParseOutcome>, String> {
    match step_id {
        STEP_DOCUMENT_PARSING | STEP_VALIDATION => Ok(None),
        STEP_PROJECT_ANALYSIS => Ok(Some(ParseOutcome::Analysis(project_analysis()))),
        STEP_HISTORICAL_DATA => Ok(Some(ParseOutcome::Similar(similar_documents()))),
        other => Err(format!("No parser registered for step {}", other)),
    }
}

// ========================
// Validation
// ========================

pub fn validation_documents() -> Vec<ValidationDocument> {
    vec![
        ValidationDocument {
            id: "1",
            name: "RFP-2023-001.pdf",
            file_type: "PDF",
            upload_date: "2023-10-15",
            size: "2.5 MB",
        },
        ValidationDocument {
            id: "2",
            name: "Technical-Requirements.docx",
            file_type: "DOCX",
            upload_date: "2023-10-14",
            size: "1.8 MB",
        },
        ValidationDocument {
            id: "3",
            name: "Project-Timeline.pdf",
            file_type: "PDF",
            upload_date: "2023-10-13",
            size: "500 KB",
        },
    ]
}

pub fn validation_standards() -> Vec<ValidationStandard> {
    vec![
        ValidationStandard {
            id: "iso-9001",
            name: "ISO 9001:2015",
            description: "Quality management systems requirements",
            category: StandardCategory::Industry,
            version: "2015",
            last_updated: "2023-01-15",
            mandatory: true,
            source: Some("https://www.iso.org/standard/62085.html"),
        },
        ValidationStandard {
            id: "gdpr",
            name: "GDPR Compliance",
            description: "General Data Protection Regulation requirements",
            category: StandardCategory::Government,
            version: "2018",
            last_updated: "2023-03-20",
            mandatory: true,
            source: Some("https://gdpr.eu/"),
        },
        ValidationStandard {
            id: "internal-rfp",
            name: "RFP Best Practices",
            description: "Internal guidelines for RFP document structure and content",
            category: StandardCategory::Internal,
            version: "2.1",
            last_updated: "2023-09-01",
            mandatory: false,
            source: None,
        },
        ValidationStandard {
            id: "accessibility",
            name: "WCAG 2.1",
            description: "Web Content Accessibility Guidelines",
            category: StandardCategory::Compliance,
            version: "2.1",
            last_updated: "2023-06-15",
            mandatory: false,
            source: Some("https://www.w3.org/WAI/standards-guidelines/wcag/"),
        },
        ValidationStandard {
            id: "security",
            name: "Security Requirements",
            description: "Document security and data protection standards",
            category: StandardCategory::Compliance,
            version: "1.5",
            last_updated: "2023-08-10",
            mandatory: false,
            source: None,
        },
    ]
}

fn failed(id: &'static str) -> FailedStandard {
    let (name, category) = match id {
        "iso-9001" => ("ISO 9001:2015", StandardCategory::Industry),
        "gdpr" => ("GDPR Compliance", StandardCategory::Government),
        "internal-rfp" => ("RFP Best Practices", StandardCategory::Internal),
        "security" => ("Security Requirements", StandardCategory::Compliance),
        _ => ("WCAG 2.1", StandardCategory::Compliance),
    };
    FailedStandard { id, name, category }
}

pub fn validation_results(document_id: &str) -> Vec<ValidationItem> {
    match document_id {
        "1" => vec![
            ValidationItem {
                id: "1-1",
                severity: Severity::Error,
                message: "Missing required section: Executive Summary",
                section: Some("Document Structure"),
                page: None,
                details: Some("The Executive Summary section is mandatory for all RFP documents."),
                failed_standards: vec![failed("internal-rfp"), failed("iso-9001")],
            },
            ValidationItem {
                id: "1-2",
                severity: Severity::Warning,
                message: "Budget information may be incomplete",
                section: Some("Financial Details"),
                page: Some(5),
                details: Some("The budget section should include both one-time and recurring costs."),
                failed_standards: vec![failed("internal-rfp")],
            },
            ValidationItem {
                id: "1-3",
                severity: Severity::Info,
                message: "Consider adding more technical details",
                section: Some("Technical Approach"),
                page: Some(8),
                details: None,
                failed_standards: vec![failed("iso-9001")],
            },
            ValidationItem {
                id: "1-4",
                severity: Severity::Success,
                message: "Timeline section is well-defined",
                section: Some("Project Timeline"),
                page: Some(12),
                details: None,
                failed_standards: Vec::new(),
            },
        ],
        "2" => vec![
            ValidationItem {
                id: "2-1",
                severity: Severity::Warning,
                message: "Some requirements lack acceptance criteria",
                section: Some("Requirements"),
                page: Some(3),
                details: None,
                failed_standards: vec![failed("iso-9001"), failed("security")],
            },
            ValidationItem {
                id: "2-2",
                severity: Severity::Success,
                message: "All mandatory sections are present",
                section: Some("Document Structure"),
                page: None,
                details: None,
                failed_standards: Vec::new(),
            },
        ],
        "3" => vec![ValidationItem {
            id: "3-1",
            severity: Severity::Error,
            message: "Timeline missing key milestones",
            section: Some("Project Timeline"),
            page: Some(1),
            details: None,
            failed_standards: vec![failed("internal-rfp"), failed("gdpr")],
        }],
        _ => Vec::new(),
    }
}

// ========================
// Templates
// ========================

fn section(id: &str, title: &str, description: &str, content: &str) -> TemplateSection {
    TemplateSection {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        default_content: content.to_string(),
        required: true,
    }
}

pub fn templates() -> Vec<Template> {
    vec![
        Template {
            id: "1".to_string(),
            name: "Standard RFP Response".to_string(),
            description: "A comprehensive template for responding to Request for Proposals".to_string(),
            category: TemplateCategory::Rfp,
            sections: vec![
                section(
                    "1-1",
                    "Executive Summary",
                    "Brief overview of the proposal",
                    "Provide a concise summary of your proposal...",
                ),
                section(
                    "1-2",
                    "Company Background",
                    "Information about your company",
                    "Describe your company history, expertise...",
                ),
            ],
        },
        Template {
            id: "2".to_string(),
            name: "Quick RFQ Template".to_string(),
            description: "Streamlined template for Request for Quotation responses".to_string(),
            category: TemplateCategory::Rfq,
            sections: vec![section(
                "2-1",
                "Price Breakdown",
                "Detailed cost structure",
                "List all costs and pricing details...",
            )],
        },
    ]
}

// ========================
// Knowledge store
// ========================

pub fn knowledge_documents() -> Vec<KnowledgeDocument> {
    vec![
        KnowledgeDocument {
            id: 1,
            title: "Enterprise Software RFP Template".to_string(),
            category: KnowledgeCategory::Template,
            last_used: date(2024, 3, 10),
            usage_count: 45,
            relevance: Some(0.95),
            description: Some(
                "A comprehensive template for enterprise software RFPs, including sections for technical requirements, pricing, and vendor evaluation."
                    .to_string(),
            ),
        },
        KnowledgeDocument {
            id: 2,
            title: "Cloud Infrastructure Proposal Example".to_string(),
            category: KnowledgeCategory::Example,
            last_used: date(2024, 3, 9),
            usage_count: 32,
            relevance: Some(0.45),
            description: Some(
                "Example proposal for cloud infrastructure migration project. Warning: Some sections may be outdated."
                    .to_string(),
            ),
        },
        KnowledgeDocument {
            id: 3,
            title: "Mobile App Development Best Practices".to_string(),
            category: KnowledgeCategory::Guideline,
            last_used: date(2024, 3, 8),
            usage_count: 67,
            relevance: Some(0.88),
            description: Some(
                "Guidelines and best practices for mobile app development proposals, including iOS and Android considerations."
                    .to_string(),
            ),
        },
    ]
}

// ========================
// File explorer
// ========================

pub fn file_tree() -> Vec<FileNode> {
    vec![
        FileNode {
            id: "1",
            name: "RFPs",
            kind: NodeKind::Folder,
            size: None,
            modified: date(2024, 3, 10),
            children: vec![
                FileNode {
                    id: "1-1",
                    name: "Software Development RFP.docx",
                    kind: NodeKind::File,
                    size: Some("2.5 MB"),
                    modified: date(2024, 3, 10),
                    children: Vec::new(),
                },
                FileNode {
                    id: "1-2",
                    name: "Cloud Infrastructure RFP.pdf",
                    kind: NodeKind::File,
                    size: Some("1.8 MB"),
                    modified: date(2024, 3, 9),
                    children: Vec::new(),
                },
            ],
        },
        FileNode {
            id: "2",
            name: "Proposals",
            kind: NodeKind::Folder,
            size: None,
            modified: date(2024, 3, 9),
            children: vec![FileNode {
                id: "2-1",
                name: "Q1 2024 Proposals",
                kind: NodeKind::Folder,
                size: None,
                modified: date(2024, 3, 8),
                children: Vec::new(),
            }],
        },
    ]
}

// ========================
// Team, activity, chat
// ========================

pub fn team() -> Vec<TeamMember> {
    vec![
        TeamMember {
            id: 1,
            name: "John Doe",
            role: "Project Manager",
            email: "john@example.com",
            phone: "+1 (555) 123-4567",
            image_url: AVATAR_JOHN,
            presence: Presence::Active,
        },
        TeamMember {
            id: 2,
            name: "Jane Smith",
            role: "Proposal Writer",
            email: "jane@example.com",
            phone: "+1 (555) 234-5678",
            image_url: AVATAR_JANE,
            presence: Presence::Active,
        },
        TeamMember {
            id: 3,
            name: "Michael Johnson",
            role: "Technical Writer",
            email: "michael@example.com",
            phone: "+1 (555) 345-6789",
            image_url: AVATAR_MICHAEL,
            presence: Presence::Away,
        },
    ]
}

fn activity(
    id: &str,
    action: &str,
    description: &str,
    category: ActivityCategory,
    timestamp: DateTime<Utc>,
    user: (&str, &str),
    metadata: Vec<(&str, serde_json::Value)>,
) -> ActivityEntry {
    ActivityEntry {
        id: id.to_string(),
        action: action.to_string(),
        description: description.to_string(),
        category,
        timestamp,
        user_name: user.0.to_string(),
        user_email: user.1.to_string(),
        metadata: metadata.into_iter().map(|(k, v)| (k.to_string(), v)).collect(),
    }
}

pub fn activities() -> Vec<ActivityEntry> {
    vec![
        activity(
            "1",
            "Document Upload",
            "Uploaded new RFP document \"Enterprise Software Requirements.pdf\"",
            ActivityCategory::Document,
            ts(2024, 3, 15, 10, 30),
            ("John Doe", "john.doe@example.com"),
            vec![("fileSize", json!("2.5MB")), ("documentType", json!("RFP"))],
        ),
        activity(
            "2",
            "Validation Complete",
            "Document validation completed successfully",
            ActivityCategory::Validation,
            ts(2024, 3, 15, 9, 15),
            ("Jane Smith", "jane.smith@example.com"),
            vec![("documentId", json!("DOC-2024-001")), ("standardsChecked", json!(15))],
        ),
        activity(
            "3",
            "Knowledge Base Update",
            "Added new document to knowledge base",
            ActivityCategory::Knowledge,
            ts(2024, 3, 14, 16, 45),
            ("Mike Johnson", "mike.j@example.com"),
            vec![("relevanceScore", json!(0.85))],
        ),
        activity(
            "4",
            "Chat Session",
            "AI chat session about proposal requirements",
            ActivityCategory::Chat,
            ts(2024, 3, 14, 14, 30),
            ("Sarah Wilson", "sarah.w@example.com"),
            vec![("duration", json!("15 minutes")), ("messagesCount", json!(12))],
        ),
    ]
}

pub const CHAT_GREETING: &str = "Hello! I can help you analyze documents and answer questions about your RFPs, RFQs, and proposals. What would you like to know?";
pub const CHAT_REPLY: &str = "I'm analyzing your question. Let me help you with that...";

pub fn chat_history() -> Vec<ChatHistoryEntry> {
    vec![
        ChatHistoryEntry {
            id: "1",
            title: "RFP Document Analysis",
            last_message: "Here's the analysis of your RFP document...",
            when: "2h ago",
        },
        ChatHistoryEntry {
            id: "2",
            title: "Proposal Review",
            last_message: "I've reviewed your proposal and here are my suggestions...",
            when: "1d ago",
        },
        ChatHistoryEntry {
            id: "3",
            title: "Template Creation",
            last_message: "The new template has been created successfully...",
            when: "2d ago",
        },
    ]
}

// ========================
// Help, Salesforce, Settings, Profile
// ========================

pub fn guides() -> Vec<Guide> {
    vec![
        Guide {
            title: "Getting Started",
            description: "Learn the basics of using the document management system",
            icon: Icon::Book,
            items: vec![
                "Creating your first document",
                "Understanding the dashboard",
                "Working with templates",
            ],
        },
        Guide {
            title: "Tutorials",
            description: "Step-by-step guides for common tasks",
            icon: Icon::Video,
            items: vec![
                "How to upload and process documents",
                "Managing team permissions",
                "Using the knowledge store",
            ],
        },
        Guide {
            title: "FAQs",
            description: "Frequently asked questions and answers",
            icon: Icon::Question,
            items: vec!["Account management", "Document processing", "Security and privacy"],
        },
    ]
}

pub fn salesforce_connection() -> SalesforceConnection {
    SalesforceConnection {
        status: ConnectionStatus::Disconnected,
        last_sync: ts(2024, 1, 20, 10, 30),
        org_name: "Your Organization",
        environment: "Production",
    }
}

pub fn salesforce_objects() -> Vec<SalesforceObject> {
    vec![
        SalesforceObject { name: "Opportunities", count: 156, icon: Icon::FileText },
        SalesforceObject { name: "Accounts", count: 89, icon: Icon::Users },
        SalesforceObject { name: "Contacts", count: 342, icon: Icon::Users },
        SalesforceObject { name: "Custom Objects", count: 45, icon: Icon::Database },
    ]
}

/// (label, current value, action)
pub const SALESFORCE_SETTINGS: [(&str, &str, &str); 3] = [
    ("Salesforce Environment", "Production", "Change"),
    ("Auto-Sync Schedule", "Every 6 hours", "Configure"),
    ("API Version", "v58.0", "Update"),
];

/// (label, url, icon)
pub const SALESFORCE_LINKS: [(&str, &str, Icon); 3] = [
    ("Salesforce Login", "https://login.salesforce.com", Icon::Cloud),
    ("Developer Documentation", "https://developer.salesforce.com", Icon::FileText),
    ("Trailhead Learning", "https://trailhead.salesforce.com", Icon::Database),
];

fn text(id: &'static str, label: &'static str, input_type: &'static str, value: &'static str) -> SettingItem {
    SettingItem { id, label, kind: SettingKind::Text { input_type, value, disabled: false } }
}

fn switch(id: &'static str, label: &'static str, on: bool) -> SettingItem {
    SettingItem { id, label, kind: SettingKind::Switch(on) }
}

fn select(id: &'static str, label: &'static str, options: &[&'static str]) -> SettingItem {
    SettingItem {
        id,
        label,
        kind: SettingKind::Select { options: options.to_vec(), value: None },
    }
}

fn button(id: &'static str, label: &'static str, action: &'static str) -> SettingItem {
    SettingItem { id, label, kind: SettingKind::Button(action) }
}

/// Id of the select bound to the theme store
pub const THEME_SETTING_ID: &str = "theme";

pub fn settings_sections() -> Vec<SettingsSection> {
    vec![
        SettingsSection {
            id: "profile",
            name: "Profile Settings",
            icon: Icon::User,
            description: "Manage your account information and preferences",
            items: vec![
                text("name", "Full Name", "text", "John Doe"),
                text("email", "Email Address", "email", "john@example.com"),
                SettingItem {
                    id: "role",
                    label: "Role",
                    kind: SettingKind::Text { input_type: "text", value: "Project Manager", disabled: true },
                },
                text("phone", "Phone Number", "tel", "+1 (555) 123-4567"),
                text("company", "Company", "text", "Tech Solutions Inc."),
            ],
        },
        SettingsSection {
            id: "notifications",
            name: "Notifications",
            icon: Icon::Bell,
            description: "Configure how you receive notifications",
            items: vec![
                switch("email_notifications", "Email Notifications", true),
                switch("document_updates", "Document Updates", true),
                switch("team_mentions", "Team Mentions", true),
                switch("proposal_alerts", "Proposal Alerts", true),
                switch("chat_messages", "Chat Messages", true),
                switch("system_updates", "System Updates", false),
            ],
        },
        SettingsSection {
            id: "security",
            name: "Security",
            icon: Icon::Lock,
            description: "Manage your security preferences and authentication settings",
            items: vec![
                switch("two_factor", "Two-factor Authentication", false),
                button("password", "Change Password", "Change"),
                button("sessions", "Active Sessions", "View"),
                button("api_keys", "API Keys", "Manage"),
                button("login_history", "Login History", "View"),
            ],
        },
        SettingsSection {
            id: "system",
            name: "System",
            icon: Icon::Globe,
            description: "System-wide settings and preferences",
            items: vec![
                select("language", "Language", &["English", "Spanish", "French", "German", "Chinese", "Japanese"]),
                select("timezone", "Timezone", &["UTC", "EST", "CST", "PST", "GMT", "IST"]),
                select(THEME_SETTING_ID, "Theme", &["Light", "Dark", "System"]),
                select("date_format", "Date Format", &["MM/DD/YYYY", "DD/MM/YYYY", "YYYY-MM-DD"]),
            ],
        },
        SettingsSection {
            id: "documents",
            name: "Document Settings",
            icon: Icon::FileText,
            description: "Configure document handling and processing preferences",
            items: vec![
                select("default_template", "Default Template", &["Basic", "Professional", "Technical"]),
                switch("auto_save", "Auto-save Documents", true),
                switch("version_history", "Keep Version History", true),
                select("pdf_quality", "PDF Export Quality", &["Draft", "Standard", "High"]),
            ],
        },
        SettingsSection {
            id: "integrations",
            name: "Integrations",
            icon: Icon::Cloud,
            description: "Manage external service connections and APIs",
            items: vec![
                switch("salesforce", "Salesforce Integration", true),
                switch("google_drive", "Google Drive", false),
                switch("ms_teams", "Microsoft Teams", false),
                switch("slack", "Slack", true),
            ],
        },
        SettingsSection {
            id: "appearance",
            name: "Appearance",
            icon: Icon::Monitor,
            description: "Customize the look and feel of your workspace",
            items: vec![
                select("sidebar_position", "Sidebar Position", &["Left", "Right"]),
                switch("compact_view", "Compact View", false),
                select("font_size", "Font Size", &["Small", "Medium", "Large"]),
                switch("show_avatars", "Show User Avatars", true),
            ],
        },
        SettingsSection {
            id: "shortcuts",
            name: "Keyboard Shortcuts",
            icon: Icon::Keyboard,
            description: "Customize keyboard shortcuts for quick access",
            items: vec![
                switch("enable_shortcuts", "Enable Keyboard Shortcuts", true),
                button("custom_shortcuts", "Custom Shortcuts", "Configure"),
                button("shortcuts_list", "View All Shortcuts", "View"),
            ],
        },
    ]
}

pub fn user_profile() -> UserProfile {
    UserProfile {
        name: "John Doe".to_string(),
        email: "john.doe@company.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        company: "Tech Solutions Inc.".to_string(),
        location: "San Francisco, CA".to_string(),
        position: "Senior Proposal Manager".to_string(),
        avatar: "https://api.dicebear.com/7.x/avataaars/svg?seed=John".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_notifications() {
        let seeds = seed_notifications();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds.iter().filter(|n| !n.read).count(), 1);
        assert!(seeds[0].created_at > seeds[1].created_at);
    }

    #[test]
    fn test_parse_step_results() {
        for step in parsing_steps() {
            assert!(parse_step_result(step.id).is_ok(), "{}", step.id);
        }
        assert!(matches!(
            parse_step_result(STEP_PROJECT_ANALYSIS),
            Ok(Some(ParseOutcome::Analysis(_)))
        ));
        assert!(parse_step_result("ocr").is_err());
    }

    #[test]
    fn test_every_validation_document_has_results() {
        for doc in validation_documents() {
            assert!(!validation_results(doc.id).is_empty(), "{}", doc.id);
        }
        assert!(validation_results("missing").is_empty());
    }

    #[test]
    fn test_single_theme_setting() {
        let count = settings_sections()
            .iter()
            .flat_map(|s| s.items.iter())
            .filter(|i| i.id == THEME_SETTING_ID)
            .count();
        assert_eq!(count, 1);
    }
}

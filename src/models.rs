//! Frontend Models
//!
//! Domain records shown by the pages. Categorical fields are closed enums.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::icon::Icon;

// ========================
// Documents
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentKind {
    Rfp,
    Rfq,
    Proposal,
}

impl DocumentKind {
    pub fn label(self) -> &'static str {
        match self {
            DocumentKind::Rfp => "RFP",
            DocumentKind::Rfq => "RFQ",
            DocumentKind::Proposal => "Proposal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DocumentStatus {
    Draft,
    Submitted,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn label(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "Draft",
            DocumentStatus::Submitted => "Submitted",
            DocumentStatus::Approved => "Approved",
            DocumentStatus::Rejected => "Rejected",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            DocumentStatus::Draft => "badge gray",
            DocumentStatus::Submitted => "badge blue",
            DocumentStatus::Approved => "badge green",
            DocumentStatus::Rejected => "badge red",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    Admin,
    Creator,
    User,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserRef {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub avatar: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentRecord {
    pub id: String,
    pub title: String,
    pub kind: DocumentKind,
    pub status: DocumentStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub creator: UserRef,
    pub file_size: String,
    pub progress: u8,
}

impl DocumentRecord {
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty()
            || self.title.to_lowercase().contains(&q)
            || self.creator.name.to_lowercase().contains(&q)
            || self.kind.label().to_lowercase().contains(&q)
    }
}

// ========================
// Dashboard
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trend {
    Positive,
    Negative,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Stat {
    pub name: &'static str,
    pub value: &'static str,
    pub icon: Icon,
    pub change: &'static str,
    pub trend: Trend,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    InProgress,
    UnderReview,
    Approved,
}

impl ReviewStatus {
    pub fn label(self) -> &'static str {
        match self {
            ReviewStatus::InProgress => "In Progress",
            ReviewStatus::UnderReview => "Under Review",
            ReviewStatus::Approved => "Approved",
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            ReviewStatus::InProgress => "badge yellow",
            ReviewStatus::UnderReview => "badge blue",
            ReviewStatus::Approved => "badge green",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecentDocument {
    pub id: u32,
    pub title: &'static str,
    pub kind: DocumentKind,
    pub status: ReviewStatus,
    pub date: NaiveDate,
}

// ========================
// Upload
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum UploadCategory {
    Rfp,
    Rfq,
    Support,
    #[default]
    Other,
}

impl UploadCategory {
    pub const ALL: [UploadCategory; 4] = [
        UploadCategory::Rfp,
        UploadCategory::Rfq,
        UploadCategory::Support,
        UploadCategory::Other,
    ];

    pub fn value(self) -> &'static str {
        match self {
            UploadCategory::Rfp => "rfp",
            UploadCategory::Rfq => "rfq",
            UploadCategory::Support => "support",
            UploadCategory::Other => "other",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            UploadCategory::Rfp => "RFP Document",
            UploadCategory::Rfq => "RFQ Document",
            UploadCategory::Support => "Supporting Document",
            UploadCategory::Other => "Other",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum UploadStatus {
    Uploading,
    Success,
    Error(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadedFile {
    pub id: String,
    pub name: String,
    pub size: u64,
    pub mime: String,
    pub progress: u8,
    pub status: UploadStatus,
    pub category: UploadCategory,
}

impl UploadedFile {
    pub fn new(id: String, name: String, size: u64, mime: String) -> Self {
        Self {
            id,
            name,
            size,
            mime,
            progress: 0,
            status: UploadStatus::Uploading,
            category: UploadCategory::default(),
        }
    }

    /// Advance simulated progress; returns true once finished
    pub fn tick(&mut self, step: u8) -> bool {
        if self.status != UploadStatus::Uploading {
            return true;
        }
        self.progress = self.progress.saturating_add(step).min(100);
        if self.progress == 100 {
            self.status = UploadStatus::Success;
        }
        self.progress == 100
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AdditionalInfo {
    pub project_name: String,
    pub project_description: String,
    pub expected_delivery_date: String,
    pub budget: String,
    pub additional_instructions: String,
}

/// Upload page output, handed to parsing
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadPayload {
    pub files: Vec<UploadedFile>,
    pub info: AdditionalInfo,
}

// ========================
// Parsing
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    pub fn label(self) -> &'static str {
        match self {
            Complexity::Low => "Low",
            Complexity::Medium => "Medium",
            Complexity::High => "High",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectAnalysis {
    pub project_type: String,
    pub domain: String,
    pub complexity: Complexity,
    pub challenges: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimilarDocument {
    pub id: String,
    pub name: String,
    pub similarity: u8,
}

/// Result attached to a completed parsing step
#[derive(Debug, Clone, PartialEq)]
pub enum ParseOutcome {
    Analysis(ProjectAnalysis),
    Similar(Vec<SimilarDocument>),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedProject {
    pub analysis: Option<ProjectAnalysis>,
    pub similar: Vec<SimilarDocument>,
}

impl ParsedProject {
    pub fn from_outcomes<'a>(outcomes: impl IntoIterator<Item = &'a ParseOutcome>) -> Self {
        let mut project = ParsedProject::default();
        for outcome in outcomes {
            match outcome {
                ParseOutcome::Analysis(a) => project.analysis = Some(a.clone()),
                ParseOutcome::Similar(docs) => project.similar = docs.clone(),
            }
        }
        project
    }
}

/// Parsing page output, handed to proposal generation
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ParsedPayload {
    pub parsed: ParsedProject,
    pub upload: Option<UploadPayload>,
}

// ========================
// Validation
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationDocument {
    pub id: &'static str,
    pub name: &'static str,
    pub file_type: &'static str,
    pub upload_date: &'static str,
    pub size: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StandardCategory {
    Industry,
    Government,
    Internal,
    Compliance,
}

impl StandardCategory {
    pub fn label(self) -> &'static str {
        match self {
            StandardCategory::Industry => "Industry Standard",
            StandardCategory::Government => "Government Regulation",
            StandardCategory::Internal => "Internal Standard",
            StandardCategory::Compliance => "Compliance Requirement",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            StandardCategory::Industry => Icon::Book,
            StandardCategory::Government => Icon::Alert,
            StandardCategory::Internal => Icon::Check,
            StandardCategory::Compliance => Icon::Warning,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            StandardCategory::Industry => "chip blue",
            StandardCategory::Government => "chip red",
            StandardCategory::Internal => "chip green",
            StandardCategory::Compliance => "chip yellow",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationStandard {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: StandardCategory,
    pub version: &'static str,
    pub last_updated: &'static str,
    pub mandatory: bool,
    pub source: Option<&'static str>,
}

/// Standards grouped by category, in first-seen order
pub fn group_standards(standards: &[ValidationStandard]) -> Vec<(StandardCategory, Vec<ValidationStandard>)> {
    let mut groups: Vec<(StandardCategory, Vec<ValidationStandard>)> = Vec::new();
    for standard in standards {
        match groups.iter_mut().find(|(c, _)| *c == standard.category) {
            Some((_, list)) => list.push(standard.clone()),
            None => groups.push((standard.category, vec![standard.clone()])),
        }
    }
    groups
}

/// Selected standard ids; mandatory ones cannot be deselected
#[derive(Debug, Clone, PartialEq)]
pub struct StandardSelection {
    selected: Vec<&'static str>,
}

impl StandardSelection {
    pub fn mandatory_only(standards: &[ValidationStandard]) -> Self {
        Self {
            selected: standards.iter().filter(|s| s.mandatory).map(|s| s.id).collect(),
        }
    }

    pub fn contains(&self, id: &str) -> bool {
        self.selected.contains(&id)
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn toggle(&mut self, standards: &[ValidationStandard], id: &str) {
        let Some(standard) = standards.iter().find(|s| s.id == id) else {
            return;
        };
        if standard.mandatory {
            return;
        }
        if self.contains(id) {
            self.selected.retain(|s| *s != id);
        } else {
            self.selected.push(standard.id);
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
    Success,
}

impl Severity {
    pub const ALL: [Severity; 4] = [Severity::Error, Severity::Warning, Severity::Info, Severity::Success];

    pub fn plural(self) -> &'static str {
        match self {
            Severity::Error => "Errors",
            Severity::Warning => "Warnings",
            Severity::Info => "Infos",
            Severity::Success => "Successes",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Severity::Error => Icon::Cross,
            Severity::Warning => Icon::Warning,
            Severity::Info => Icon::Alert,
            Severity::Success => Icon::Check,
        }
    }

    pub fn css_class(self) -> &'static str {
        match self {
            Severity::Error => "severity error",
            Severity::Warning => "severity warning",
            Severity::Info => "severity info",
            Severity::Success => "severity success",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FailedStandard {
    pub id: &'static str,
    pub name: &'static str,
    pub category: StandardCategory,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ValidationItem {
    pub id: &'static str,
    pub severity: Severity,
    pub message: &'static str,
    pub section: Option<&'static str>,
    pub page: Option<u32>,
    pub details: Option<&'static str>,
    pub failed_standards: Vec<FailedStandard>,
}

impl ValidationItem {
    /// "Section: X | Page: N"
    pub fn location(&self) -> Option<String> {
        match (self.section, self.page) {
            (Some(s), Some(p)) => Some(format!("Section: {} | Page: {}", s, p)),
            (Some(s), None) => Some(format!("Section: {}", s)),
            (None, Some(p)) => Some(format!("Page: {}", p)),
            (None, None) => None,
        }
    }
}

pub fn severity_counts(items: &[ValidationItem]) -> Vec<(Severity, usize)> {
    Severity::ALL
        .into_iter()
        .map(|sev| (sev, items.iter().filter(|i| i.severity == sev).count()))
        .collect()
}

// ========================
// Templates
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TemplateCategory {
    Rfp,
    Rfq,
    #[default]
    General,
}

impl TemplateCategory {
    pub const ALL: [TemplateCategory; 3] = [TemplateCategory::Rfp, TemplateCategory::Rfq, TemplateCategory::General];

    pub fn value(self) -> &'static str {
        match self {
            TemplateCategory::Rfp => "rfp",
            TemplateCategory::Rfq => "rfq",
            TemplateCategory::General => "general",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TemplateCategory::Rfp => "RFP",
            TemplateCategory::Rfq => "RFQ",
            TemplateCategory::General => "General",
        }
    }

    pub fn from_value(value: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.value() == value)
            .unwrap_or_default()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateSection {
    pub id: String,
    pub title: String,
    pub description: String,
    pub default_content: String,
    pub required: bool,
}

impl TemplateSection {
    pub fn blank(id: String) -> Self {
        Self {
            id,
            title: "New Section".to_string(),
            description: "Describe this section".to_string(),
            default_content: String::new(),
            required: false,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Template {
    pub id: String,
    pub name: String,
    pub description: String,
    pub category: TemplateCategory,
    pub sections: Vec<TemplateSection>,
}

impl Template {
    pub fn blank(id: String) -> Self {
        Self { id, ..Default::default() }
    }

    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        q.is_empty() || self.name.to_lowercase().contains(&q) || self.description.to_lowercase().contains(&q)
    }
}

// ========================
// Knowledge store
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KnowledgeCategory {
    Rfp,
    Rfq,
    Proposal,
    Template,
    Example,
    Guideline,
}

impl KnowledgeCategory {
    pub const ALL: [KnowledgeCategory; 6] = [
        KnowledgeCategory::Rfp,
        KnowledgeCategory::Rfq,
        KnowledgeCategory::Proposal,
        KnowledgeCategory::Template,
        KnowledgeCategory::Example,
        KnowledgeCategory::Guideline,
    ];

    /// Choices offered by the upload modal
    pub const UPLOADABLE: [KnowledgeCategory; 5] = [
        KnowledgeCategory::Rfp,
        KnowledgeCategory::Rfq,
        KnowledgeCategory::Proposal,
        KnowledgeCategory::Template,
        KnowledgeCategory::Guideline,
    ];

    pub fn value(self) -> &'static str {
        match self {
            KnowledgeCategory::Rfp => "rfp",
            KnowledgeCategory::Rfq => "rfq",
            KnowledgeCategory::Proposal => "proposal",
            KnowledgeCategory::Template => "template",
            KnowledgeCategory::Example => "example",
            KnowledgeCategory::Guideline => "guideline",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            KnowledgeCategory::Rfp => "RFP Documents",
            KnowledgeCategory::Rfq => "RFQ Documents",
            KnowledgeCategory::Proposal => "Proposals",
            KnowledgeCategory::Template => "Templates",
            KnowledgeCategory::Example => "Examples",
            KnowledgeCategory::Guideline => "Guidelines",
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeDocument {
    pub id: u32,
    pub title: String,
    pub category: KnowledgeCategory,
    pub last_used: NaiveDate,
    pub usage_count: u32,
    pub relevance: Option<f64>,
    pub description: Option<String>,
}

/// Knowledge-store search box and category select
#[derive(Debug, Clone, Default, PartialEq)]
pub struct KnowledgeQuery {
    pub search: String,
    pub category: Option<KnowledgeCategory>,
}

impl KnowledgeQuery {
    pub fn matches(&self, doc: &KnowledgeDocument) -> bool {
        let q = self.search.trim().to_lowercase();
        let text_ok = q.is_empty()
            || doc.title.to_lowercase().contains(&q)
            || doc
                .description
                .as_deref()
                .is_some_and(|d| d.to_lowercase().contains(&q));
        let category_ok = self.category.is_none_or(|c| c == doc.category);
        text_ok && category_ok
    }
}

/// Categories present in the store, in first-seen order
pub fn present_categories(docs: &[KnowledgeDocument]) -> Vec<KnowledgeCategory> {
    let mut seen = Vec::new();
    for doc in docs {
        if !seen.contains(&doc.category) {
            seen.push(doc.category);
        }
    }
    seen
}

/// Next free id after the current maximum
pub fn next_knowledge_id(docs: &[KnowledgeDocument]) -> u32 {
    docs.iter().map(|d| d.id).max().unwrap_or(0) + 1
}

// ========================
// File explorer
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeKind {
    File,
    Folder,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FileNode {
    pub id: &'static str,
    pub name: &'static str,
    pub kind: NodeKind,
    pub size: Option<&'static str>,
    pub modified: NaiveDate,
    pub children: Vec<FileNode>,
}

// ========================
// Team
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Active,
    Away,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    pub id: u32,
    pub name: &'static str,
    pub role: &'static str,
    pub email: &'static str,
    pub phone: &'static str,
    pub image_url: &'static str,
    pub presence: Presence,
}

// ========================
// Activity log
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActivityCategory {
    Document,
    System,
    User,
    Validation,
    Chat,
    Knowledge,
}

impl ActivityCategory {
    pub const ALL: [ActivityCategory; 6] = [
        ActivityCategory::Document,
        ActivityCategory::System,
        ActivityCategory::User,
        ActivityCategory::Validation,
        ActivityCategory::Chat,
        ActivityCategory::Knowledge,
    ];

    pub fn value(self) -> &'static str {
        match self {
            ActivityCategory::Document => "document",
            ActivityCategory::System => "system",
            ActivityCategory::User => "user",
            ActivityCategory::Validation => "validation",
            ActivityCategory::Chat => "chat",
            ActivityCategory::Knowledge => "knowledge",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ActivityCategory::Document => "Documents",
            ActivityCategory::System => "System",
            ActivityCategory::User => "Users",
            ActivityCategory::Validation => "Validation",
            ActivityCategory::Chat => "Chat",
            ActivityCategory::Knowledge => "Knowledge Base",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            ActivityCategory::Document => Icon::FileText,
            ActivityCategory::System => Icon::Settings,
            ActivityCategory::User => Icon::User,
            ActivityCategory::Validation => Icon::CheckSquare,
            ActivityCategory::Chat => Icon::Chat,
            ActivityCategory::Knowledge => Icon::Database,
        }
    }

    pub fn from_value(value: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|c| c.value() == value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ActivityEntry {
    pub id: String,
    pub action: String,
    pub description: String,
    pub category: ActivityCategory,
    pub timestamp: DateTime<Utc>,
    pub user_name: String,
    pub user_email: String,
    /// Ordered key/value details
    pub metadata: Vec<(String, serde_json::Value)>,
}

// ========================
// Chat
// ========================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Assistant,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatMessage {
    pub id: String,
    pub content: String,
    pub sender: Sender,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatHistoryEntry {
    pub id: &'static str,
    pub title: &'static str,
    pub last_message: &'static str,
    pub when: &'static str,
}

/// Document a chat was opened for
#[derive(Debug, Clone, PartialEq)]
pub struct ChatDocument {
    pub id: u32,
    pub title: String,
}

// ========================
// Help, Salesforce, Settings, Profile
// ========================

#[derive(Debug, Clone, PartialEq)]
pub struct Guide {
    pub title: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub items: Vec<&'static str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConnectionStatus {
    Connected,
    Disconnected,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesforceConnection {
    pub status: ConnectionStatus,
    pub last_sync: DateTime<Utc>,
    pub org_name: &'static str,
    pub environment: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SalesforceObject {
    pub name: &'static str,
    pub count: u32,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq)]
pub enum SettingKind {
    Text { input_type: &'static str, value: &'static str, disabled: bool },
    Switch(bool),
    Select { options: Vec<&'static str>, value: Option<&'static str> },
    Button(&'static str),
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingItem {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: SettingKind,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SettingsSection {
    pub id: &'static str,
    pub name: &'static str,
    pub icon: Icon,
    pub description: &'static str,
    pub items: Vec<SettingItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub location: String,
    pub position: String,
    pub avatar: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;

    #[test]
    fn test_upload_tick_reaches_success_in_five_steps() {
        let mut f = UploadedFile::new("x".into(), "rfp.pdf".into(), 10, "application/pdf".into());
        for _ in 0..4 {
            assert!(!f.tick(20));
        }
        assert_eq!(f.progress, 80);
        assert!(f.tick(20));
        assert_eq!(f.status, UploadStatus::Success);
        assert!(f.tick(20));
        assert_eq!(f.progress, 100);
    }

    #[test]
    fn test_standard_selection_locks_mandatory() {
        let standards = mock_data::validation_standards();
        let mut sel = StandardSelection::mandatory_only(&standards);
        assert_eq!(sel.len(), 2);
        assert!(sel.contains("iso-9001"));

        sel.toggle(&standards, "iso-9001");
        assert!(sel.contains("iso-9001"));

        sel.toggle(&standards, "security");
        assert!(sel.contains("security"));
        sel.toggle(&standards, "security");
        assert!(!sel.contains("security"));

        sel.toggle(&standards, "unknown");
        assert_eq!(sel.len(), 2);
    }

    #[test]
    fn test_group_standards_keeps_first_seen_order() {
        let groups = group_standards(&mock_data::validation_standards());
        let order: Vec<_> = groups.iter().map(|(c, _)| *c).collect();
        assert_eq!(
            order,
            vec![
                StandardCategory::Industry,
                StandardCategory::Government,
                StandardCategory::Internal,
                StandardCategory::Compliance
            ]
        );
        assert_eq!(groups[3].1.len(), 2);
    }

    #[test]
    fn test_severity_counts_and_location() {
        let items = mock_data::validation_results("1");
        let counts = severity_counts(&items);
        assert_eq!(
            counts,
            vec![
                (Severity::Error, 1),
                (Severity::Warning, 1),
                (Severity::Info, 1),
                (Severity::Success, 1)
            ]
        );
        assert_eq!(items[0].location().as_deref(), Some("Section: Document Structure"));
        assert_eq!(items[1].location().as_deref(), Some("Section: Financial Details | Page: 5"));
    }

    #[test]
    fn test_knowledge_query() {
        let docs = mock_data::knowledge_documents();
        let mut q = KnowledgeQuery::default();
        assert_eq!(docs.iter().filter(|d| q.matches(d)).count(), 3);

        q.search = "ios".to_string();
        let hits: Vec<_> = docs.iter().filter(|d| q.matches(d)).map(|d| d.id).collect();
        assert_eq!(hits, vec![3]);

        q.search.clear();
        q.category = Some(KnowledgeCategory::Example);
        let hits: Vec<_> = docs.iter().filter(|d| q.matches(d)).map(|d| d.id).collect();
        assert_eq!(hits, vec![2]);

        assert_eq!(next_knowledge_id(&docs), 4);
        assert_eq!(next_knowledge_id(&[]), 1);
        assert_eq!(present_categories(&docs).len(), 3);
    }

    #[test]
    fn test_parsed_project_from_outcomes() {
        let outcomes = [
            ParseOutcome::Similar(vec![SimilarDocument { id: "1".into(), name: "A".into(), similarity: 85 }]),
            ParseOutcome::Analysis(mock_data::project_analysis()),
        ];
        let project = ParsedProject::from_outcomes(outcomes.iter());
        assert_eq!(project.similar.len(), 1);
        assert_eq!(project.analysis.map(|a| a.domain), Some("Healthcare".to_string()));
    }

    #[test]
    fn test_template_search() {
        let templates = mock_data::templates();
        let hits: Vec<_> = templates.iter().filter(|t| t.matches("quotation")).map(|t| t.id.as_str()).collect();
        assert_eq!(hits, vec!["2"]);
        assert!(templates.iter().all(|t| t.matches("")));
    }
}

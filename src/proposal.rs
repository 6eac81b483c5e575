//! Proposal Sections
//!
//! Section catalogue, placeholder-aware content, and the Markdown export.

use crate::models::{ParsedPayload, ProjectAnalysis};
use crate::workflow::Step;

/// Generated section text
pub type SectionContent = String;

pub const SECTIONS: [(&str, &str); 6] = [
    ("executive-summary", "Executive Summary"),
    ("project-overview", "Project Overview"),
    ("technical-approach", "Technical Approach"),
    ("methodology", "Methodology"),
    ("timeline", "Timeline and Milestones"),
    ("budget", "Budget Breakdown"),
];

pub fn proposal_steps() -> Vec<Step<SectionContent>> {
    SECTIONS
        .into_iter()
        .map(|(id, title)| Step::new(id, title, ""))
        .collect()
}

/// Non-empty value, else the bracketed placeholder
fn or_placeholder<'a>(value: Option<&'a str>, placeholder: &'a str) -> &'a str {
    value.map(str::trim).filter(|v| !v.is_empty()).unwrap_or(placeholder)
}

/// Mock text of one section, filled from the payload
pub fn section_content(id: &str, payload: &ParsedPayload) -> String {
    let analysis: Option<&ProjectAnalysis> = payload.parsed.analysis.as_ref();
    let info = payload.upload.as_ref().map(|u| &u.info);

    // The upload form has no client field
    let client = "[Client Name]";
    let project_type = or_placeholder(analysis.map(|a| a.project_type.as_str()), "[Project Type]");
    let domain = or_placeholder(analysis.map(|a| a.domain.as_str()), "[Domain]");
    let project_name = or_placeholder(info.map(|i| i.project_name.as_str()), "[Project Name]");

    match id {
        "executive-summary" => format!(
            "This proposal outlines our comprehensive solution for {}'s {} project in the {} sector. \
             With our extensive experience and proven track record, we are confident in delivering a \
             high-quality solution that meets all specified requirements within the given timeline and budget.",
            client, project_type, domain
        ),
        "project-overview" => {
            let complexity = analysis.map(|a| a.complexity.label()).unwrap_or("[Complexity]");
            let challenges = match analysis {
                Some(a) if !a.challenges.is_empty() => a
                    .challenges
                    .iter()
                    .map(|c| format!("- {}", c))
                    .collect::<Vec<_>>()
                    .join("\n"),
                _ => "- No challenges specified".to_string(),
            };
            format!(
                "Project Name: {}\nClient: {}\nDomain: {}\nComplexity: {}\n\nKey Challenges:\n{}",
                project_name, client, domain, complexity, challenges
            )
        }
        "technical-approach" => "Our technical approach leverages cutting-edge technologies and industry best \
             practices to ensure robust, scalable, and maintainable solutions. We will implement a \
             microservices architecture using cloud-native technologies to ensure high availability and performance."
            .to_string(),
        "methodology" => "We follow an Agile development methodology with two-week sprint cycles. This approach \
             allows for regular feedback and adjustments throughout the development process, ensuring \
             alignment with project goals and requirements."
            .to_string(),
        "timeline" => format!(
            "Project Timeline: {}\n\nKey Milestones:\n\
             - Requirements Analysis and Planning: 2 weeks\n\
             - Design and Architecture: 3 weeks\n\
             - Development Phase 1: 6 weeks\n\
             - Testing and QA: 3 weeks\n\
             - Deployment and Training: 2 weeks",
            or_placeholder(info.map(|i| i.expected_delivery_date.as_str()), "[Timeline]")
        ),
        "budget" => format!(
            "Total Budget: {}\n\nBreakdown:\n\
             - Development: 60%\n\
             - Testing and QA: 15%\n\
             - Project Management: 10%\n\
             - Training and Documentation: 10%\n\
             - Contingency: 5%",
            or_placeholder(info.map(|i| i.budget.as_str()), "[Budget]")
        ),
        _ => "Content generation in progress...".to_string(),
    }
}

/// `# Title\n\ncontent\n\n` per section, joined by `---`
pub fn to_markdown<'a>(sections: impl IntoIterator<Item = (&'a str, &'a str)>) -> String {
    sections
        .into_iter()
        .map(|(title, content)| format!("# {}\n\n{}\n\n", title, content))
        .collect::<Vec<_>>()
        .join("---\n\n")
}

pub fn download_name(payload: &ParsedPayload) -> String {
    let name = payload
        .upload
        .as_ref()
        .map(|u| u.info.project_name.trim())
        .filter(|n| !n.is_empty())
        .unwrap_or("proposal");
    format!("{}.md", name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mock_data;
    use crate::models::{AdditionalInfo, ParsedProject, UploadPayload};

    fn payload() -> ParsedPayload {
        ParsedPayload {
            parsed: ParsedProject {
                analysis: Some(mock_data::project_analysis()),
                similar: mock_data::similar_documents(),
            },
            upload: Some(UploadPayload {
                files: Vec::new(),
                info: AdditionalInfo {
                    project_name: "Patient Portal".to_string(),
                    budget: "$250,000".to_string(),
                    ..Default::default()
                },
            }),
        }
    }

    #[test]
    fn test_content_uses_payload() {
        let p = payload();
        let summary = section_content("executive-summary", &p);
        assert!(summary.contains("[Client Name]'s Software Development project in the Healthcare sector"));

        let overview = section_content("project-overview", &p);
        assert!(overview.starts_with("Project Name: Patient Portal\n"));
        assert!(overview.contains("Complexity: High"));
        assert!(overview.contains("- HIPAA compliance requirements"));

        assert!(section_content("budget", &p).starts_with("Total Budget: $250,000"));
        assert!(section_content("timeline", &p).starts_with("Project Timeline: [Timeline]"));
    }

    #[test]
    fn test_content_placeholders_without_payload() {
        let empty = ParsedPayload::default();
        let overview = section_content("project-overview", &empty);
        assert!(overview.contains("Project Name: [Project Name]"));
        assert!(overview.contains("Complexity: [Complexity]"));
        assert!(overview.ends_with("- No challenges specified"));
        assert_eq!(section_content("nope", &empty), "Content generation in progress...");
        assert_eq!(download_name(&empty), "proposal.md");
        assert_eq!(download_name(&payload()), "Patient Portal.md");
    }

    #[test]
    fn test_markdown_export() {
        let md = to_markdown([("A", "one"), ("B", "two")]);
        assert_eq!(md, "# A\n\none\n\n---\n\n# B\n\ntwo\n\n");
    }

    #[test]
    fn test_steps_follow_catalogue() {
        let ids: Vec<_> = proposal_steps().iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), 6);
        assert_eq!(ids[0], "executive-summary");
        assert_eq!(ids[5], "budget");
    }
}

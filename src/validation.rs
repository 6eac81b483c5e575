//! Form Validation
//!
//! Pure checks behind every form. A failed check aborts the submit and is
//! rendered inline; nothing is mutated.

use crate::error::ValidationError;
use crate::format::format_file_size;
use crate::models::KnowledgeCategory;

pub const MIN_PASSWORD_LEN: usize = 8;

/// Accepted extensions for a file input
#[derive(Debug, Clone, Copy)]
pub struct FileRule {
    pub extensions: &'static [&'static str],
    pub allowed_label: &'static str,
}

/// Upload page drop zone
pub const UPLOAD_RULE: FileRule = FileRule {
    extensions: &[".pdf", ".doc", ".docx"],
    allowed_label: "PDF, DOC and DOCX",
};

/// Knowledge-store upload modal
pub const KNOWLEDGE_RULE: FileRule = FileRule {
    extensions: &[".pdf", ".docx"],
    allowed_label: "PDF and DOCX",
};

impl FileRule {
    /// Value for the `accept` attribute
    pub fn accept(&self) -> String {
        self.extensions.join(",")
    }

    pub fn check(&self, name: &str, size: u64, max_bytes: u64) -> Result<(), ValidationError> {
        let lower = name.to_lowercase();
        if !self.extensions.iter().any(|ext| lower.ends_with(ext)) {
            return Err(ValidationError::UnsupportedFileType {
                name: name.to_string(),
                allowed: self.allowed_label,
            });
        }
        if size > max_bytes {
            return Err(ValidationError::FileTooLarge {
                name: name.to_string(),
                limit: format_file_size(max_bytes),
            });
        }
        Ok(())
    }
}

/// Category, then description, then files
pub fn check_knowledge_upload(
    category: Option<KnowledgeCategory>,
    description: &str,
    file_count: usize,
) -> Result<KnowledgeCategory, ValidationError> {
    let category = category.ok_or(ValidationError::MissingCategory)?;
    if description.trim().is_empty() {
        return Err(ValidationError::MissingDescription);
    }
    if file_count == 0 {
        return Err(ValidationError::NoFiles);
    }
    Ok(category)
}

/// `local@domain.tld`, nothing fancier
pub fn check_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();
    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail);
    };
    let domain_ok = domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && !domain.contains('@');
    if local.is_empty() || !domain_ok || email.contains(char::is_whitespace) {
        return Err(ValidationError::InvalidEmail);
    }
    Ok(())
}

pub fn check_password(password: &str) -> Result<(), ValidationError> {
    if password.chars().count() < MIN_PASSWORD_LEN {
        return Err(ValidationError::PasswordTooShort { min: MIN_PASSWORD_LEN });
    }
    Ok(())
}

pub fn check_login(email: &str, password: &str) -> Result<(), ValidationError> {
    check_email(email)?;
    if password.is_empty() {
        return Err(ValidationError::MissingField("Password"));
    }
    Ok(())
}

pub fn check_registration(name: &str, email: &str, password: &str, confirm: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("Full name"));
    }
    check_email(email)?;
    check_password(password)?;
    if password != confirm {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

pub fn check_template_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingField("Template name"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const MB: u64 = 1024 * 1024;

    #[test]
    fn test_upload_rule() {
        assert!(UPLOAD_RULE.check("rfp.PDF", 1000, 10 * MB).is_ok());
        assert!(UPLOAD_RULE.check("terms.doc", 1000, 10 * MB).is_ok());
        assert!(UPLOAD_RULE.check("terms.docx", 10 * MB, 10 * MB).is_ok());

        let err = UPLOAD_RULE.check("notes.txt", 10, 10 * MB).unwrap_err();
        assert!(matches!(err, ValidationError::UnsupportedFileType { .. }));

        let err = UPLOAD_RULE.check("huge.pdf", 10 * MB + 1, 10 * MB).unwrap_err();
        assert_eq!(err.to_string(), "huge.pdf is larger than 10 MB");
    }

    #[test]
    fn test_knowledge_rule_rejects_doc() {
        let err = KNOWLEDGE_RULE.check("old.doc", 10, 10 * MB).unwrap_err();
        assert_eq!(err.to_string(), "old.doc: only PDF and DOCX files are allowed");
        assert_eq!(KNOWLEDGE_RULE.accept(), ".pdf,.docx");
    }

    #[test]
    fn test_knowledge_modal_order() {
        assert_eq!(check_knowledge_upload(None, "", 0), Err(ValidationError::MissingCategory));
        assert_eq!(
            check_knowledge_upload(Some(KnowledgeCategory::Rfp), "  ", 0),
            Err(ValidationError::MissingDescription)
        );
        assert_eq!(
            check_knowledge_upload(Some(KnowledgeCategory::Rfp), "desc", 0),
            Err(ValidationError::NoFiles)
        );
        assert_eq!(
            check_knowledge_upload(Some(KnowledgeCategory::Guideline), "desc", 2),
            Ok(KnowledgeCategory::Guideline)
        );
        assert_eq!(ValidationError::NoFiles.to_string(), "Please upload at least one file");
    }

    #[test]
    fn test_email() {
        assert!(check_email("jane@example.com").is_ok());
        assert!(check_email(" jane@mail.example.org ").is_ok());
        for bad in ["", "jane", "jane@", "@example.com", "jane@example", "jane@.com", "jane@example.", "ja ne@example.com", "a@b@c.com"] {
            assert_eq!(check_email(bad), Err(ValidationError::InvalidEmail), "{}", bad);
        }
    }

    #[test]
    fn test_registration() {
        assert!(check_registration("Jane", "jane@example.com", "password1", "password1").is_ok());
        assert_eq!(
            check_registration("", "jane@example.com", "password1", "password1"),
            Err(ValidationError::MissingField("Full name"))
        );
        assert_eq!(
            check_registration("Jane", "jane@example.com", "short", "short"),
            Err(ValidationError::PasswordTooShort { min: 8 })
        );
        assert_eq!(
            check_registration("Jane", "jane@example.com", "password1", "password2"),
            Err(ValidationError::PasswordMismatch)
        );
    }

    #[test]
    fn test_login_and_template_name() {
        assert_eq!(check_login("jane@example.com", ""), Err(ValidationError::MissingField("Password")));
        assert!(check_login("jane@example.com", "x").is_ok());
        assert!(check_template_name("  ").is_err());
        assert!(check_template_name("RFP Response").is_ok());
    }
}

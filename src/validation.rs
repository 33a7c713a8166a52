//! Form Validation
//!
//! Field-shape checks run before a user is submitted.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::models::UserDraft;

/// Letters (including Turkish accented letters) and whitespace
static NAME_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-ZğüşıöçĞÜŞİÖÇ\s]+$").expect("name pattern is valid"));

/// `local@domain.tld`, no whitespace and a single `@`
static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid"));

pub fn is_valid_name(name: &str) -> bool {
    NAME_PATTERN.is_match(name.trim())
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// Check name then email, reporting the first failure
pub fn validate_user_draft(draft: &UserDraft) -> Result<(), ValidationError> {
    if !is_valid_name(&draft.name) {
        return Err(ValidationError::Name);
    }
    if !is_valid_email(&draft.email) {
        return Err(ValidationError::Email);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_names() {
        assert!(is_valid_name("Ann Lee"));
        assert!(is_valid_name("  Çağrı Öztürk  "));
        assert!(is_valid_name("İlkay Şahin"));
        assert!(!is_valid_name("Ann3"));
        assert!(!is_valid_name("O'Brien"));
        assert!(!is_valid_name(""));
        assert!(!is_valid_name("   "));
    }

    #[test]
    fn test_emails() {
        assert!(is_valid_email("a@b.co"));
        assert!(is_valid_email("first.last@mail.example.org"));
        assert!(!is_valid_email("a@@b"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.de"));
        assert!(!is_valid_email("@b.co"));
    }

    #[test]
    fn test_validate_user_draft_reports_name_first() {
        let draft = UserDraft {
            name: "R2D2".to_string(),
            username: "droid".to_string(),
            email: "not-an-email".to_string(),
        };
        assert_eq!(validate_user_draft(&draft), Err(ValidationError::Name));

        let draft = UserDraft { name: "Leia".to_string(), ..draft };
        assert_eq!(validate_user_draft(&draft), Err(ValidationError::Email));

        let draft = UserDraft { email: "leia@alderaan.gov".to_string(), ..draft };
        assert_eq!(validate_user_draft(&draft), Ok(()));
    }
}

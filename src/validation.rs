//! Form Validation
//!
//! Shallow checks run before any request. Anything deeper (password rules,
//! duplicate accounts) is the API's job.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::{ClientError, ClientResult};
use crate::models::TaskDraft;

pub const MSG_LOGIN_FIELDS: &str = "Fill in all fields";
pub const MSG_SIGNUP_FIELDS: &str = "Please fill in all fields";
pub const MSG_EMAIL_DOMAIN: &str = "Only @gmail.com or @*.in email addresses are allowed";
pub const MSG_TITLE_REQUIRED: &str = "Title is required";

/// `@gmail.com` or any single-label `.in` domain
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_.+-]+@(gmail\.com|[A-Za-z0-9_-]+\.in)$")
        .expect("email pattern is valid")
});

fn blank(value: &str) -> bool {
    value.trim().is_empty()
}

pub fn validate_login(identifier: &str, password: &str) -> ClientResult<()> {
    if blank(identifier) || blank(password) {
        return Err(ClientError::Validation(MSG_LOGIN_FIELDS.into()));
    }
    Ok(())
}

pub fn validate_signup(username: &str, email: &str, password: &str) -> ClientResult<()> {
    if blank(username) || blank(email) || blank(password) {
        return Err(ClientError::Validation(MSG_SIGNUP_FIELDS.into()));
    }
    if !is_allowed_email(email.trim()) {
        return Err(ClientError::Validation(MSG_EMAIL_DOMAIN.into()));
    }
    Ok(())
}

pub fn validate_draft(draft: &TaskDraft) -> ClientResult<()> {
    if blank(&draft.title) {
        return Err(ClientError::Validation(MSG_TITLE_REQUIRED.into()));
    }
    Ok(())
}

pub fn is_allowed_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_requires_both_fields() {
        assert!(validate_login("", "secret").is_err());
        assert!(validate_login("asha", "   ").is_err());
        assert!(validate_login("asha", "secret").is_ok());
    }

    #[test]
    fn test_allowed_emails() {
        assert!(is_allowed_email("a.b+c@gmail.com"));
        assert!(is_allowed_email("x@college.in"));
        assert!(is_allowed_email("first_last-1@my-school.in"));
    }

    #[test]
    fn test_rejected_emails() {
        assert!(!is_allowed_email("someone@yahoo.com"));
        assert!(!is_allowed_email("someone@gmail.co"));
        assert!(!is_allowed_email("someone@sub.domain.in"));
        assert!(!is_allowed_email("@gmail.com"));
        assert!(!is_allowed_email("someone@gmail.com.evil"));
        assert!(!is_allowed_email("sömeone@gmail.com"));
    }

    #[test]
    fn test_signup_checks_fields_before_email() {
        let err = validate_signup("", "bad", "pw").unwrap_err();
        assert_eq!(err, ClientError::Validation(MSG_SIGNUP_FIELDS.into()));

        let err = validate_signup("asha", "asha@outlook.com", "pw").unwrap_err();
        assert_eq!(err, ClientError::Validation(MSG_EMAIL_DOMAIN.into()));

        assert!(validate_signup("asha", "asha@gmail.com", "pw").is_ok());
    }

    #[test]
    fn test_draft_title_required() {
        let mut draft = TaskDraft::default();
        draft.title = "  ".into();
        assert!(validate_draft(&draft).is_err());
        draft.title = "Pay rent".into();
        assert!(validate_draft(&draft).is_ok());
    }
}

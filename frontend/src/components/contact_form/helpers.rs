//! Pure validation for the contact form.
//!
//! `validate` maps the draft to a fixed record with one optional error slot
//! per validated field. The view renders each slot inline next to its
//! field; `update.rs` refuses to issue the create request unless the record
//! is clean. `message` is intentionally never validated.

use regex::Regex;

use super::state::ContactDraft;

/// One optional error message per validated form field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub full_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub qualification: Option<String>,
}

impl FieldErrors {
    pub fn is_clean(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.qualification.is_none()
    }
}

/// Checks every field of the draft and reports exactly the invalid ones.
pub fn validate(draft: &ContactDraft) -> FieldErrors {
    let mut errors = FieldErrors::default();

    if draft.full_name.trim().is_empty() {
        errors.full_name = Some("Full Name is required.".to_string());
    }

    if draft.email.trim().is_empty() {
        errors.email = Some("Email is required.".to_string());
    } else if !is_valid_email(&draft.email) {
        errors.email = Some("Invalid email address.".to_string());
    }

    if draft.phone.trim().is_empty() {
        errors.phone = Some("Phone Number is required.".to_string());
    } else if !is_valid_phone(&draft.phone) {
        errors.phone = Some("Phone Number must be 10 digits.".to_string());
    }

    if draft.qualification.is_none() {
        errors.qualification = Some("Qualification is required.".to_string());
    }

    errors
}

/// Permissive shape check: one `@` and one `.` separating non-space
/// segments somewhere in the text.
fn is_valid_email(email: &str) -> bool {
    Regex::new(r"\S+@\S+\.\S+").unwrap().is_match(email)
}

/// Exactly 10 ASCII digits.
fn is_valid_phone(phone: &str) -> bool {
    Regex::new(r"^[0-9]{10}$").unwrap().is_match(phone)
}

#[cfg(test)]
mod tests {
    use super::*;
    use common::model::contact::Qualification;

    fn valid_draft() -> ContactDraft {
        ContactDraft {
            full_name: "Jane Doe".into(),
            email: "user@example.com".into(),
            phone: "1234567890".into(),
            qualification: Some(Qualification::Bachelors),
            message: String::new(),
        }
    }

    #[test]
    fn valid_draft_is_clean() {
        assert_eq!(validate(&valid_draft()), FieldErrors::default());
        assert!(validate(&valid_draft()).is_clean());
    }

    #[test]
    fn empty_draft_reports_every_required_field() {
        let errors = validate(&ContactDraft::default());
        assert_eq!(errors.full_name.as_deref(), Some("Full Name is required."));
        assert_eq!(errors.email.as_deref(), Some("Email is required."));
        assert_eq!(errors.phone.as_deref(), Some("Phone Number is required."));
        assert_eq!(errors.qualification.as_deref(), Some("Qualification is required."));
    }

    #[test]
    fn whitespace_only_name_fails() {
        let mut draft = valid_draft();
        draft.full_name = "   ".into();
        let errors = validate(&draft);
        assert_eq!(errors.full_name.as_deref(), Some("Full Name is required."));
        // Only the invalid field is reported.
        assert_eq!(errors.email, None);
        assert_eq!(errors.phone, None);
        assert_eq!(errors.qualification, None);
    }

    #[test]
    fn malformed_email_fails_with_email_error() {
        let mut draft = valid_draft();
        draft.email = "bad-email".into();
        assert_eq!(validate(&draft).email.as_deref(), Some("Invalid email address."));
    }

    #[test]
    fn short_phone_fails_and_ten_digits_pass() {
        let mut draft = valid_draft();
        draft.phone = "12345".into();
        assert_eq!(
            validate(&draft).phone.as_deref(),
            Some("Phone Number must be 10 digits.")
        );
        draft.phone = "1234567890".into();
        assert_eq!(validate(&draft).phone, None);
    }

    #[test]
    fn phone_with_letters_fails() {
        let mut draft = valid_draft();
        draft.phone = "12345abcde".into();
        assert_eq!(
            validate(&draft).phone.as_deref(),
            Some("Phone Number must be 10 digits.")
        );
    }

    #[test]
    fn missing_qualification_fails() {
        let mut draft = valid_draft();
        draft.qualification = None;
        assert_eq!(
            validate(&draft).qualification.as_deref(),
            Some("Qualification is required.")
        );
    }

    #[test]
    fn message_is_never_validated() {
        let mut draft = valid_draft();
        draft.message = String::new();
        assert!(validate(&draft).is_clean());
    }
}

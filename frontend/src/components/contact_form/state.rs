//! Component state for the public contact form.

use common::model::contact::Qualification;
use common::requests::CreateContactRequest;

use super::helpers::FieldErrors;

/// Submission lifecycle of the form view.
///
/// `Failed` means the request left the client but no confirmation arrived;
/// the form stays locked in its submitted state with no retry.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SubmitPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// The visitor's input, exactly as entered. `qualification` is `None`
/// until an option from the fixed set is selected.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactDraft {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: Option<Qualification>,
    pub message: String,
}

impl ContactDraft {
    /// Builds the request body, verbatim field values. `None` while no
    /// qualification is selected, which validation rules out before any
    /// submit reaches this point.
    pub fn to_request(&self) -> Option<CreateContactRequest> {
        let qualification = self.qualification?;
        Some(CreateContactRequest {
            full_name: self.full_name.clone(),
            email: self.email.clone(),
            phone: self.phone.clone(),
            qualification: qualification.label().to_string(),
            message: self.message.clone(),
        })
    }
}

pub struct ContactFormComponent {
    pub draft: ContactDraft,
    pub errors: FieldErrors,
    pub phase: SubmitPhase,
}

impl ContactFormComponent {
    pub fn new() -> Self {
        Self {
            draft: ContactDraft::default(),
            errors: FieldErrors::default(),
            phase: SubmitPhase::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn to_request_carries_entered_values_verbatim() {
        let draft = ContactDraft {
            full_name: "  Jane Doe ".into(),
            email: "jane@example.com".into(),
            phone: "1234567890".into(),
            qualification: Some(Qualification::PhD),
            message: "hello".into(),
        };
        let request = draft.to_request().unwrap();
        assert_eq!(request.full_name, "  Jane Doe ");
        assert_eq!(request.qualification, "Ph.D.");
        assert_eq!(request.message, "hello");
    }

    #[test]
    fn to_request_requires_a_qualification() {
        assert_eq!(ContactDraft::default().to_request(), None);
    }
}

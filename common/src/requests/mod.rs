//! Wire payloads exchanged with the backend.
//!
//! Request bodies are camelCase to match the backend's JSON contract.
//! Response shapes are permissive where the backend is: error bodies may or
//! may not carry a `message`, and the listing payload's `data` field is
//! only trusted after an explicit shape check.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::model::contact::Contact;

/// Body of `POST /api/contact/create`. All five form fields, verbatim as
/// the visitor entered them.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateContactRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub qualification: String,
    pub message: String,
}

/// Body of `POST /api/admin/login`.
#[derive(Clone, Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful login body.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub token: String,
}

/// Best-effort shape of a non-2xx body.
#[derive(Debug, Default, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub message: Option<String>,
}

/// Body of `GET /api/admin/get-all-contacts`. `data` is held as a raw JSON
/// value so the client can reject unexpected shapes instead of rendering
/// garbage.
#[derive(Debug, Deserialize)]
pub struct ContactListResponse {
    pub data: Value,
}

impl ContactListResponse {
    /// Returns the contact records, or `None` when `data` is not a sequence
    /// of well-formed records.
    pub fn contacts(self) -> Option<Vec<Contact>> {
        if !self.data.is_array() {
            return None;
        }
        serde_json::from_value(self.data).ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_request_uses_camel_case_wire_names() {
        let body = serde_json::to_value(CreateContactRequest {
            full_name: "Jane Doe".into(),
            email: "jane@example.com".into(),
            phone: "1234567890".into(),
            qualification: "Master's".into(),
            message: String::new(),
        })
        .unwrap();
        assert_eq!(body["fullName"], "Jane Doe");
        assert_eq!(body["qualification"], "Master's");
    }

    #[test]
    fn login_response_extracts_token() {
        let body: LoginResponse = serde_json::from_str(r#"{"token":"abc123"}"#).unwrap();
        assert_eq!(body.token, "abc123");
    }

    #[test]
    fn error_response_message_is_optional() {
        let with: ErrorResponse =
            serde_json::from_str(r#"{"message":"Invalid credentials"}"#).unwrap();
        assert_eq!(with.message.as_deref(), Some("Invalid credentials"));
        let without: ErrorResponse = serde_json::from_str("{}").unwrap();
        assert_eq!(without.message, None);
    }

    #[test]
    fn listing_with_empty_array_yields_no_contacts() {
        let body: ContactListResponse = serde_json::from_str(r#"{"data":[]}"#).unwrap();
        assert_eq!(body.contacts(), Some(vec![]));
    }

    #[test]
    fn listing_preserves_field_values_verbatim() {
        let body: ContactListResponse = serde_json::from_str(
            r#"{"data":[{"fullName":"A","email":"a@x.com","phone":"1111111111","qualification":"Bachelor's","message":"hi"}]}"#,
        )
        .unwrap();
        let contacts = body.contacts().unwrap();
        assert_eq!(contacts.len(), 1);
        assert_eq!(contacts[0].full_name, "A");
        assert_eq!(contacts[0].email, "a@x.com");
        assert_eq!(contacts[0].phone, "1111111111");
        assert_eq!(contacts[0].qualification, "Bachelor's");
        assert_eq!(contacts[0].message.as_deref(), Some("hi"));
    }

    #[test]
    fn listing_with_non_array_data_is_rejected() {
        let body: ContactListResponse = serde_json::from_str(r#"{"data":{"count":3}}"#).unwrap();
        assert_eq!(body.contacts(), None);
    }

    #[test]
    fn listing_with_malformed_records_is_rejected() {
        let body: ContactListResponse = serde_json::from_str(r#"{"data":[{"fullName":42}]}"#).unwrap();
        assert_eq!(body.contacts(), None);
    }
}

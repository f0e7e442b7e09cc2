//! Component state for the admin dashboard.

use common::model::contact::Contact;

use crate::api::ApiError;

/// Listing lifecycle of the dashboard view. The states are mutually
/// exclusive: `Loading` shows until the single fetch resolves into exactly
/// one of the other three.
#[derive(Clone, Debug, PartialEq)]
pub enum ListingPhase {
    Loading,
    Loaded(Vec<Contact>),
    Empty,
    Error(String),
}

impl ListingPhase {
    /// Maps the fetch outcome to a phase. A shape mismatch gets its fixed
    /// message; other failures show the server's message when present.
    pub fn from_result(result: Result<Vec<Contact>, ApiError>) -> Self {
        match result {
            Ok(contacts) if contacts.is_empty() => ListingPhase::Empty,
            Ok(contacts) => ListingPhase::Loaded(contacts),
            Err(ApiError::Format) => {
                ListingPhase::Error("Contacts data is not in the expected format.".to_string())
            }
            Err(err) => ListingPhase::Error(err.user_message("Failed to fetch contacts")),
        }
    }
}

pub struct DashboardComponent {
    pub phase: ListingPhase,
}

impl DashboardComponent {
    pub fn new() -> Self {
        Self {
            phase: ListingPhase::Loading,
        }
    }
}

//! Thin client over the backend endpoints.
//!
//! Paths are same-origin relative; the dev server proxies them to the
//! backend. Each call maps failures into [`ApiError`] so the views only
//! deal with three cases: transport trouble, a server rejection, or a
//! response that does not have the promised shape.

use gloo_net::http::{Request, Response};

use common::model::contact::Contact;
use common::requests::{
    ContactListResponse, CreateContactRequest, ErrorResponse, LoginRequest, LoginResponse,
};

#[derive(Debug, PartialEq)]
pub enum ApiError {
    /// Transport or server failure before a usable response arrived.
    Network(String),
    /// Non-200 response, with the server's message when the body had one.
    Rejected(Option<String>),
    /// 200 response whose payload is not in the expected format.
    Format,
}

impl ApiError {
    /// The single banner message shown for this error. `fallback` is the
    /// generic per-view message used when the server said nothing useful.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            ApiError::Rejected(Some(message)) => message.clone(),
            _ => fallback.to_string(),
        }
    }
}

/// Submits a public contact form entry. The body carries the five fields
/// verbatim; the response body is ignored beyond the status.
pub async fn create_contact(request: &CreateContactRequest) -> Result<(), ApiError> {
    let response = Request::post("/api/contact/create")
        .json(request)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if response.status() == 200 {
        Ok(())
    } else {
        Err(rejection(response).await)
    }
}

/// Exchanges admin credentials for a bearer token. A 200 body without a
/// token counts as a rejected login, never as a garbage token.
pub async fn login(request: &LoginRequest) -> Result<String, ApiError> {
    let response = Request::post("/api/admin/login")
        .json(request)
        .map_err(|err| ApiError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if response.status() == 200 {
        let body: LoginResponse = response
            .json()
            .await
            .map_err(|_| ApiError::Rejected(None))?;
        Ok(body.token)
    } else {
        Err(rejection(response).await)
    }
}

/// Fetches all contact records with the given bearer token. Callers must
/// already have confirmed a token exists.
pub async fn fetch_contacts(token: &str) -> Result<Vec<Contact>, ApiError> {
    let response = Request::get("/api/admin/get-all-contacts")
        .header("Authorization", &format!("Bearer {}", token))
        .send()
        .await
        .map_err(|err| ApiError::Network(err.to_string()))?;

    if response.status() == 200 {
        let body: ContactListResponse = response.json().await.map_err(|_| ApiError::Format)?;
        body.contacts().ok_or(ApiError::Format)
    } else {
        Err(rejection(response).await)
    }
}

async fn rejection(response: Response) -> ApiError {
    let message = response
        .json::<ErrorResponse>()
        .await
        .ok()
        .and_then(|body| body.message);
    ApiError::Rejected(message)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_server_text() {
        let err = ApiError::Rejected(Some("Invalid credentials".into()));
        assert_eq!(err.user_message("Login failed"), "Invalid credentials");
    }

    #[test]
    fn user_message_falls_back_when_server_is_silent() {
        assert_eq!(ApiError::Rejected(None).user_message("Login failed"), "Login failed");
        assert_eq!(
            ApiError::Network("timed out".into()).user_message("Failed to fetch contacts"),
            "Failed to fetch contacts"
        );
    }
}

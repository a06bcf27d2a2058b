//! Contact form DTOs for `POST /api/contact/`.

use serde::{Deserialize, Serialize};

/// Contact form submission body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactRequest {
    /// Build a request from raw form values, trimming surrounding whitespace.
    pub fn from_form(name: &str, email: &str, subject: &str, message: &str) -> Self {
        Self {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            subject: subject.trim().to_string(),
            message: message.trim().to_string(),
        }
    }

    /// Static validation: every field must be non-empty after trimming.
    ///
    /// Returns a user-facing message on failure; no request should be sent
    /// when this fails.
    pub fn validate(&self) -> Result<(), String> {
        if self.name.is_empty()
            || self.email.is_empty()
            || self.subject.is_empty()
            || self.message.is_empty()
        {
            return Err("Please fill in all fields.".to_string());
        }
        Ok(())
    }
}

/// Success response body.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ContactResponse {
    pub message: String,
}

/// Error response body, shared by all API endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_form_trims_fields() {
        let req = ContactRequest::from_form("  Alice ", "a@b.co\n", " Hi ", " Hello there ");
        assert_eq!(req.name, "Alice");
        assert_eq!(req.email, "a@b.co");
        assert_eq!(req.subject, "Hi");
        assert_eq!(req.message, "Hello there");
    }

    #[test]
    fn validate_rejects_empty_message() {
        let req = ContactRequest::from_form("Alice", "a@b.co", "Hi", "   ");
        assert!(req.validate().is_err());
    }

    #[test]
    fn validate_accepts_complete_form() {
        let req = ContactRequest::from_form("Alice", "a@b.co", "Hi", "Hello");
        assert!(req.validate().is_ok());
    }

    #[test]
    fn error_response_parses_server_error() {
        let err: ErrorResponse = serde_json::from_str(r#"{"error": "Missing required fields"}"#).unwrap();
        assert_eq!(err.error, "Missing required fields");
    }
}

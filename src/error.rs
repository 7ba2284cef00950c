//! API Error Contract
//!
//! Every REST call resolves to `Result<T, ApiError>`, so every view
//! handles the same shape.

use serde_json::Value;
use thiserror::Error;

/// Failure of a single REST call
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApiError {
    /// No response at all (offline, CORS, DNS)
    #[error("network error: {0}")]
    Network(String),
    #[error("server error ({status}): {message}")]
    Server { status: u16, message: String },
    /// Structured rejection of the submitted data
    #[error("{0}")]
    Validation(String),
    #[error("session expired")]
    Unauthorized,
    #[error("not allowed")]
    Forbidden,
    #[error("not found")]
    NotFound,
    #[error("unexpected response: {0}")]
    Decode(String),
}

impl ApiError {
    /// Classify a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = first_error_message(body);
        match status {
            401 => Self::Unauthorized,
            403 => Self::Forbidden,
            404 => Self::NotFound,
            400 | 409 | 422 => match message {
                Some(message) => Self::Validation(message),
                None => Self::Server {
                    status,
                    message: String::new(),
                },
            },
            _ => Self::Server {
                status,
                message: message.unwrap_or_default(),
            },
        }
    }

    /// Text for a notification: the backend's own message when it sent
    /// one, otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Validation(message) => message.clone(),
            Self::Server { message, .. } if !message.is_empty() => message.clone(),
            _ => fallback.to_string(),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized)
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound)
    }
}

/// First human-readable message in an error body.
///
/// Accepts `{"errors":[{"msg":..}]}` (express-validator),
/// `{"errors":[{"message":..}]}`, `{"errors":["..."]}`,
/// `{"message":..}` and `{"error":..}`.
pub fn first_error_message(body: &str) -> Option<String> {
    let value: Value = serde_json::from_str(body).ok()?;

    let from_errors = value
        .get("errors")
        .and_then(Value::as_array)
        .and_then(|errors| errors.first())
        .and_then(|first| match first {
            Value::String(text) => Some(text.clone()),
            Value::Object(_) => first
                .get("msg")
                .or_else(|| first.get("message"))
                .and_then(Value::as_str)
                .map(str::to_string),
            _ => None,
        });

    from_errors
        .or_else(|| value.get("message").and_then(Value::as_str).map(str::to_string))
        .or_else(|| value.get("error").and_then(Value::as_str).map(str::to_string))
        .filter(|message| !message.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_validation_message() {
        let body = r#"{"errors":[{"msg":"Email is already registered","param":"email"},{"msg":"Password too short"}]}"#;
        assert_eq!(
            ApiError::from_response(400, body),
            ApiError::Validation("Email is already registered".to_string())
        );
    }

    #[test]
    fn test_message_field_variants() {
        assert_eq!(first_error_message(r#"{"errors":["Bad date"]}"#).as_deref(), Some("Bad date"));
        assert_eq!(
            first_error_message(r#"{"errors":[{"message":"Slot taken"}]}"#).as_deref(),
            Some("Slot taken")
        );
        assert_eq!(first_error_message(r#"{"message":"Invalid credentials"}"#).as_deref(), Some("Invalid credentials"));
        assert_eq!(first_error_message(r#"{"error":"Token expired"}"#).as_deref(), Some("Token expired"));
        assert_eq!(first_error_message(r#"{"message":"  "}"#), None);
        assert_eq!(first_error_message("<html>502</html>"), None);
        assert_eq!(first_error_message(""), None);
    }

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_response(401, r#"{"message":"jwt expired"}"#), ApiError::Unauthorized);
        assert_eq!(ApiError::from_response(403, ""), ApiError::Forbidden);
        assert!(ApiError::from_response(404, "").is_not_found());
        assert_eq!(
            ApiError::from_response(500, "oops"),
            ApiError::Server { status: 500, message: String::new() }
        );
    }

    #[test]
    fn test_user_message_falls_back() {
        let fallback = "Could not save your changes.";
        assert_eq!(ApiError::Network("offline".into()).user_message(fallback), fallback);
        assert_eq!(ApiError::from_response(400, "{}").user_message(fallback), fallback);
        assert_eq!(ApiError::from_response(422, r#"{"message":"Title required"}"#).user_message(fallback), "Title required");
        assert_eq!(ApiError::from_response(503, r#"{"message":"Maintenance"}"#).user_message(fallback), "Maintenance");
        assert_eq!(ApiError::Unauthorized.user_message(fallback), fallback);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;

/// Categorization of application errors.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum AppErrorKind {
    NotFound,
    BadRequest,
    InvalidConfig,
}

impl fmt::Display for AppErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppErrorKind::NotFound => write!(f, "NotFound"),
            AppErrorKind::BadRequest => write!(f, "BadRequest"),
            AppErrorKind::InvalidConfig => write!(f, "InvalidConfig"),
        }
    }
}

/// Structured error for the few fallible edges of the site: parsing
/// category ids, loading configuration and looking resources up by id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppError {
    pub kind: AppErrorKind,
    pub message: String,
}

impl AppError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::NotFound,
            message: message.into(),
        }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::BadRequest,
            message: message.into(),
        }
    }

    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self {
            kind: AppErrorKind::InvalidConfig,
            message: message.into(),
        }
    }

    /// Message suitable for showing to a visitor.
    ///
    /// Config errors are an operator concern, so they collapse to a generic line.
    pub fn friendly_message(&self) -> String {
        match self.kind {
            AppErrorKind::InvalidConfig => "Something went wrong. Please try again.".to_string(),
            _ => self.message.clone(),
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.kind, self.message)
    }
}

impl std::error::Error for AppError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_kind_and_message() {
        let err = AppError::bad_request("unknown category 'blog'");
        assert_eq!(err.to_string(), "BadRequest: unknown category 'blog'");
    }

    #[test]
    fn constructors_set_kind() {
        assert_eq!(AppError::not_found("x").kind, AppErrorKind::NotFound);
        assert_eq!(AppError::bad_request("x").kind, AppErrorKind::BadRequest);
        assert_eq!(AppError::invalid_config("x").kind, AppErrorKind::InvalidConfig);
    }

    #[test]
    fn friendly_message_hides_config_details() {
        let err = AppError::invalid_config("expected `=` at line 3");
        assert_eq!(err.friendly_message(), "Something went wrong. Please try again.");

        let err = AppError::not_found("Resource 42 not found");
        assert_eq!(err.friendly_message(), "Resource 42 not found");
    }

    #[test]
    fn json_shape_is_stable() {
        let err = AppError::not_found("Resource 9 not found");
        let json = serde_json::to_value(&err).unwrap();
        assert_eq!(json["kind"], "NotFound");
        assert_eq!(json["message"], "Resource 9 not found");

        let parsed: AppError = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, err);
    }
}

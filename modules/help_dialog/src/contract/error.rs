//! Contract error types for the help dialog configuration core
//!
//! These errors are transport-agnostic and used for inter-module communication.

use super::model::ConfigRecord;
use serde::Serialize;
use std::fmt;

/// Category of a field level validation problem
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldErrorKind {
    /// Mandatory, non-internal field absent or empty
    MissingRequiredField,
    /// Number outside `[min, max]` or text length outside `[min, max]`
    OutOfBounds,
    /// Value not present in the field's options
    InvalidOption,
    /// Value could not be coerced to the field kind
    InvalidFormat,
    /// Same feature tab assigned to more than one position slot
    DuplicateTab,
}

impl fmt::Display for FieldErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::MissingRequiredField => "missing required field",
            Self::OutOfBounds => "out of bounds",
            Self::InvalidOption => "invalid option",
            Self::InvalidFormat => "invalid format",
            Self::DuplicateTab => "duplicate tab",
        };
        f.write_str(name)
    }
}

/// One field level validation error
#[derive(Debug, Clone, PartialEq, Eq, Serialize, thiserror::Error)]
#[error("{key}: {kind}: {message}")]
pub struct FieldError {
    pub key: String,
    pub kind: FieldErrorKind,
    pub message: String,
}

impl FieldError {
    pub fn new(key: impl Into<String>, kind: FieldErrorKind, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            kind,
            message: message.into(),
        }
    }
}

/// Validation outcome carrying the best-effort sanitized record
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("validation failed with {} field error(s)", errors.len())]
pub struct ValidationFailure {
    /// Record with every acceptable value applied
    pub record: ConfigRecord,
    pub errors: Vec<FieldError>,
}

impl ValidationFailure {
    /// Whether any error was reported for `key`
    pub fn has_error(&self, key: &str, kind: FieldErrorKind) -> bool {
        self.errors.iter().any(|e| e.key == key && e.kind == kind)
    }
}

/// Schema lookup errors
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SchemaError {
    #[error("unknown configuration scope: {0}")]
    UnknownScope(String),
}

/// Help dialog service errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HelpDialogError {
    /// Widget or preset not found
    NotFound {
        /// Resource type (widget, color_preset, dialog_width_preset)
        resource: String,
        /// Resource identifier
        id: String,
    },
    /// Submitted values were rejected
    Validation {
        /// Field level errors
        errors: Vec<FieldError>,
    },
    /// Conflict (widget limit reached, id clash)
    Conflict {
        /// Conflict reason
        reason: String,
    },
    /// Configuration store failure
    Storage {
        /// Error details
        message: String,
    },
    /// Internal error
    Internal,
}

impl HelpDialogError {
    pub fn widget_not_found(widget_id: u64) -> Self {
        Self::NotFound {
            resource: "widget".to_string(),
            id: widget_id.to_string(),
        }
    }

    pub fn storage(err: anyhow::Error) -> Self {
        Self::Storage {
            message: format!("{:#}", err),
        }
    }
}

impl fmt::Display for HelpDialogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound { resource, id } => {
                write!(f, "{} not found: {}", resource, id)
            }
            Self::Validation { errors } => {
                let details: Vec<String> = errors.iter().map(ToString::to_string).collect();
                write!(f, "Validation failed: {}", details.join(", "))
            }
            Self::Conflict { reason } => {
                write!(f, "Conflict: {}", reason)
            }
            Self::Storage { message } => {
                write!(f, "Storage error: {}", message)
            }
            Self::Internal => {
                write!(f, "Internal error")
            }
        }
    }
}

impl std::error::Error for HelpDialogError {}

impl From<ValidationFailure> for HelpDialogError {
    fn from(failure: ValidationFailure) -> Self {
        Self::Validation {
            errors: failure.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_display() {
        let err = FieldError::new("trigger_hours_to", FieldErrorKind::OutOfBounds, "must be at most 24");
        assert_eq!(err.to_string(), "trigger_hours_to: out of bounds: must be at most 24");
    }

    #[test]
    fn test_help_dialog_error_display() {
        assert_eq!(
            HelpDialogError::widget_not_found(4).to_string(),
            "widget not found: 4"
        );
        let err = HelpDialogError::Validation {
            errors: vec![FieldError::new("widget_name", FieldErrorKind::MissingRequiredField, "required")],
        };
        assert_eq!(
            err.to_string(),
            "Validation failed: widget_name: missing required field: required"
        );
    }

    #[test]
    fn test_storage_error_keeps_context() {
        let err = HelpDialogError::storage(anyhow::anyhow!("disk full").context("save widget 3"));
        assert_eq!(err.to_string(), "Storage error: save widget 3: disk full");
    }
}

pub use anyhow::bail;
use std::fmt::{self, Display, Formatter};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DevpodError {
    /// User input failed validation. `field` carries the canonical form
    /// field name so the caller can re-prompt on the right input.
    Validation {
        field: &'static str,
        message: String,
    },
    Command(String),
    Provider(String),
    Io(#[from] std::io::Error),
    Serialization(String),
    Other(#[from] anyhow::Error),
}

impl Display for DevpodError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DevpodError::Validation { field, message } => {
                write!(f, "Validation error for '{}': {}", field, message)
            }
            DevpodError::Command(s) => write!(f, "Command error: {}", s),
            DevpodError::Provider(s) => write!(f, "Provider error: {}", s),
            DevpodError::Io(e) => write!(f, "I/O error: {}", e),
            DevpodError::Serialization(s) => write!(f, "Serialization error: {}", s),
            DevpodError::Other(e) => write!(f, "Other error: {}", e),
        }
    }
}

impl From<serde_json::Error> for DevpodError {
    fn from(err: serde_json::Error) -> Self {
        DevpodError::Serialization(err.to_string())
    }
}

impl DevpodError {
    pub fn validation(field: &'static str, message: impl Into<String>) -> Self {
        DevpodError::Validation {
            field,
            message: message.into(),
        }
    }

    /// Field name of a validation error, if this is one.
    pub fn validation_field(&self) -> Option<&'static str> {
        match self {
            DevpodError::Validation { field, .. } => Some(field),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, DevpodError>;

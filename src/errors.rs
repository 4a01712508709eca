// SPDX-License-Identifier: GPL-3.0-only

//! Error types for the scan station

use crate::station::form::FormField;
use std::fmt;

/// Result type alias using AppError
pub type AppResult<T> = Result<T, AppError>;

/// Main application error type
#[derive(Debug, Clone)]
pub enum AppError {
    /// Simulator script errors
    Script(ScriptError),
    /// Terminal and output I/O errors
    Io(String),
}

/// Manual entry form validation errors
///
/// These drive the station into the reserved `ValidationError` scan state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field was left blank
    MissingField(FormField),
    /// Birthdate is not a `YYYY-MM-DD` calendar date
    MalformedBirthdate(String),
    /// PhilHealth number is not in `NN-NNNNNNNNN-N` form
    MalformedIdNumber(String),
}

/// Simulator script errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptError {
    /// Step name not recognised
    UnknownStep(String),
    /// Step argument could not be parsed
    InvalidArgument { step: String, argument: String },
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::Script(e) => write!(f, "Script error: {}", e),
            AppError::Io(msg) => write!(f, "I/O error: {}", msg),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::MissingField(field) => write!(f, "{} is required", field.label()),
            ValidationError::MalformedBirthdate(value) => {
                write!(f, "Birthdate '{}' must be YYYY-MM-DD", value)
            }
            ValidationError::MalformedIdNumber(value) => {
                write!(f, "PhilHealth no. '{}' must be NN-NNNNNNNNN-N", value)
            }
        }
    }
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScriptError::UnknownStep(step) => write!(f, "Unknown step '{}'", step),
            ScriptError::InvalidArgument { step, argument } => {
                write!(f, "Invalid argument '{}' for step '{}'", argument, step)
            }
        }
    }
}

impl std::error::Error for AppError {}
impl std::error::Error for ValidationError {}
impl std::error::Error for ScriptError {}

impl From<ScriptError> for AppError {
    fn from(err: ScriptError) -> Self {
        AppError::Script(err)
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Io(err.to_string())
    }
}

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// A single inline validation message bound to a settings field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

#[derive(Debug, thiserror::Error)]
pub enum ThemeError {
    #[error("theme validation error: {}", join_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("unknown settings path: {0}")]
    InvalidPath(String),

    #[error("type mismatch at {path}: expected {expected}")]
    TypeMismatch { path: String, expected: String },

    #[error("theme is read-only: {0}")]
    ReadOnly(String),

    #[error("theme parse error: {0}")]
    Parse(String),

    #[error("theme file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("theme io error: {0}")]
    Io(String),

    #[error("theme watch error: {0}")]
    Watch(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum VariationError {
    #[error("Name is required")]
    NameRequired,

    #[error("At least one condition is required")]
    ConditionRequired,

    #[error("variation index {index} out of range (len {len})")]
    IndexOutOfRange { index: usize, len: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("forbidden: {0}")]
    Forbidden(String),

    #[error("no data returned from {0}")]
    NoData(String),

    #[error("server error: {0}")]
    Server(String),
}

impl ApiError {
    /// Message shown to the user in a toast, without the category prefix.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Network(msg)
            | ApiError::NotFound(msg)
            | ApiError::Forbidden(msg)
            | ApiError::Server(msg) => msg.clone(),
            ApiError::NoData(op) => format!("{op} returned no data"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConsoleError {
    #[error(transparent)]
    Theme(#[from] ThemeError),

    #[error(transparent)]
    Variation(#[from] VariationError),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}

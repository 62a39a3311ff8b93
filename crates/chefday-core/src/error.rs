//! Core domain errors.

use std::fmt;

use thiserror::Error;

use crate::ids::{ChefId, RecipeId};

/// The single failure surfaced by the birthday pipeline.
///
/// Transport failures, malformed payloads and upstream "not found" replies
/// all collapse into this type and differ only by their message.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct DomainError {
    message: String,
}

impl DomainError {
    /// Create an error with an arbitrary message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The recipe could not be fetched.
    pub fn recipe_unavailable(id: RecipeId) -> Self {
        Self::new(format!("cannot retrieve recipe for id {}", id))
    }

    /// The chef could not be fetched.
    pub fn chef_unavailable(id: ChefId) -> Self {
        Self::new(format!("cannot retrieve chef for id {}", id))
    }

    /// A response did not have the expected shape.
    pub fn invalid_format(kind: RecordKind) -> Self {
        Self::new(format!("invalid {} response format", kind))
    }

    /// The upstream answered with its own error message.
    pub fn upstream(message: impl Into<String>) -> Self {
        Self::new(message)
    }

    /// A birth date could not be interpreted as a calendar date.
    pub fn invalid_birth_date(raw: &str) -> Self {
        Self::new(format!("invalid birth date '{}'", raw))
    }

    /// Get the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consume and return the message.
    pub fn into_message(self) -> String {
        self.message
    }
}

/// Which upstream record a validation error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    Recipe,
    Chef,
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordKind::Recipe => write!(f, "recipe"),
            RecordKind::Chef => write!(f, "chef"),
        }
    }
}

/// Why an untyped record failed validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    /// The body was JSON `null`.
    #[error("record is null")]
    Null,

    /// The body was not a JSON object.
    #[error("record is not an object (found {found})")]
    NotAnObject { found: &'static str },

    /// Neither the payload field nor a textual `message` was present.
    #[error("record has neither {expected} nor a textual message")]
    MissingField { expected: &'static str },

    /// An identifier field was numeric but not a non-negative integer.
    #[error("field {field} is not a valid id: {value}")]
    InvalidId { field: &'static str, value: String },
}

//! Three-state view model for whatever renders a birthday lookup.

use std::fmt;

use serde::Serialize;

use crate::error::DomainError;

/// What a caller should currently display.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum ViewState {
    /// The lookup has not settled yet.
    #[default]
    Pending,

    /// The lookup produced a formatted birth date.
    Loaded { birthday: String },

    /// The lookup failed.
    Failed { message: String },
}

impl ViewState {
    /// Settle a pipeline result into its terminal state.
    pub fn from_result(result: Result<String, DomainError>) -> Self {
        match result {
            Ok(birthday) => ViewState::Loaded { birthday },
            Err(e) => ViewState::Failed {
                message: e.into_message(),
            },
        }
    }

    /// Whether the state is terminal.
    pub fn is_settled(&self) -> bool {
        !matches!(self, ViewState::Pending)
    }
}

impl fmt::Display for ViewState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViewState::Pending => write!(f, "Fetching chef birthday..."),
            ViewState::Loaded { birthday } => write!(f, "Chef birth date: {}", birthday),
            ViewState::Failed { message } => write!(f, "Error: {}", message),
        }
    }
}

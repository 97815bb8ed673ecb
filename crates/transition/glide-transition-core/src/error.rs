//! Error types for transition preparation and application.

use serde::{Deserialize, Serialize};

/// Errors surfaced to the caller of the public `start` entry point.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum TransitionError {
    /// Selector resolved to no element.
    #[error("No element matches selector: {selector}")]
    ElementNotFound { selector: String },

    /// `$el` was missing, or neither a selector string nor an element handle.
    #[error("Invalid target: {reason}")]
    InvalidTarget { reason: String },

    /// The options object failed to deserialize.
    #[error("Invalid options: {reason}")]
    InvalidOptions { reason: String },

    /// Host environment could not mutate the document's stylesheet.
    #[error("Stylesheet injection failed: {reason}")]
    Injection { reason: String },
}

impl TransitionError {
    /// Error category for logging.
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::ElementNotFound { .. } | Self::InvalidTarget { .. } => "target",
            Self::InvalidOptions { .. } => "options",
            Self::Injection { .. } => "injection",
        }
    }
}

impl From<serde_json::Error> for TransitionError {
    fn from(err: serde_json::Error) -> Self {
        Self::InvalidOptions {
            reason: err.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_names_the_selector() {
        let err = TransitionError::ElementNotFound {
            selector: "#missing".into(),
        };
        assert_eq!(err.to_string(), "No element matches selector: #missing");
        assert_eq!(err.category(), "target");
    }

    #[test]
    fn serializes_round_trip() {
        let err = TransitionError::Injection {
            reason: "no document".into(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: TransitionError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}

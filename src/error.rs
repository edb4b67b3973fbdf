//! Error types for dialog wiring and confirm actions.

use thiserror::Error;

/// Errors raised by the dialog registry.
///
/// Both wiring variants signal bugs in the calling code rather than runtime
/// conditions, so callers are expected to surface them loudly.
#[derive(Debug, Error)]
pub enum DialogError {
    /// The accessor was used on a context with no installed provider.
    #[error("use_dialog_api must be used within a DialogProvider")]
    NoProvider,

    /// A confirm dialog was activated without a confirm action.
    #[error("confirm dialog activated without a confirm action")]
    MissingConfirmAction,

    /// The action runtime could not be started.
    #[error("failed to start action runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

/// Failure reported by a caller-supplied confirm action.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ActionError {
    message: String,
}

impl ActionError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for ActionError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for ActionError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

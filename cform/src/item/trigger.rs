use serde::{Deserialize, Serialize};

/// When a field validates itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValidateTrigger {
    /// Validate on every change.
    Change,
    /// Clear the error while editing, validate when focus leaves (default).
    #[default]
    Blur,
    /// Only validate when the owner asks for it.
    Manual,
}

/// Where to display a field's validation error.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPlacement {
    /// Show the message below the control (default).
    #[default]
    Below,
    /// Show the message to the right of the control.
    Inline,
    /// Don't show a message; the control is still marked invalid.
    None,
}

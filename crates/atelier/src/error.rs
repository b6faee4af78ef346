//! Error types for atelier.
//!
//! Most failures on a documentation page are not errors at all: a missing
//! element makes its feature inert. [`Error`] covers the rest: configuration
//! that cannot be loaded, form input the user must correct, and clipboard
//! failures reported by the host.

use thiserror::Error;

/// Errors surfaced by atelier.
#[derive(Debug, Error)]
pub enum Error {
    /// TOML configuration could not be parsed.
    #[error("config parse error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON configuration could not be parsed.
    #[error("config parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration parsed but holds values that cannot work together.
    #[error("invalid config: {0}")]
    InvalidConfig(String),

    /// User input failed validation.
    ///
    /// Recoverable: shown to the user as an error notification.
    #[error("validation error: {0}")]
    Validation(String),

    /// The host could not write to the clipboard.
    #[error("clipboard error: {0}")]
    Clipboard(String),
}

impl Error {
    /// Creates a validation error with the given message.
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    /// Creates a clipboard error with the given message.
    pub fn clipboard(message: impl Into<String>) -> Self {
        Self::Clipboard(message.into())
    }

    /// Creates an invalid-config error with the given message.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }

    /// Text suitable for showing to the user.
    ///
    /// Recoverable errors carry a message written for the page; the others
    /// fall back to their `Display` form.
    pub fn user_message(&self) -> String {
        match self {
            Self::Validation(message) | Self::Clipboard(message) => message.clone(),
            other => other.to_string(),
        }
    }

    /// Returns true if the page keeps working after this error.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_) | Self::Clipboard(_))
    }
}

/// A specialized [`Result`] type for atelier operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Custom error types for uiforge
//!
//! User-friendly error messages for all failure scenarios.

use thiserror::Error;

/// Main error type for the uiforge application
#[derive(Error, Debug)]
pub enum ForgeError {
    /// No template registered under the given slug
    #[error("Template '{0}' not found.\n\n  → Run 'uiforge list' to see available templates.")]
    TemplateNotFound(String),

    /// Category filter does not match any known category
    #[error("Unknown category '{0}'.\n\n  → Run 'uiforge categories' to see available categories.")]
    UnknownCategory(String),

    /// A palette value is neither a hex color nor a gradient
    #[error("Invalid {role} color '{value}'.\n\n  → Use a hex value like #1a2b3c or a CSS gradient.")]
    InvalidColor {
        /// Palette role being edited
        role: String,
        /// Rejected value
        value: String,
    },

    /// Archive packaging error
    #[error("Failed to build the project archive: {0}")]
    Archive(#[from] zip::result::ZipError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("File operation failed: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("Failed to serialize JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization/deserialization error
    #[error("Configuration file is invalid: {0}")]
    Toml(String),

    /// Terminal/TUI error
    #[error("Terminal error: {0}\n\n  → Try resizing your terminal or restarting it.")]
    Terminal(String),

    /// Invalid input from user
    #[error("{0}")]
    InvalidInput(String),
}

impl From<toml::de::Error> for ForgeError {
    fn from(err: toml::de::Error) -> Self {
        ForgeError::Toml(err.to_string())
    }
}

impl From<toml::ser::Error> for ForgeError {
    fn from(err: toml::ser::Error) -> Self {
        ForgeError::Toml(err.to_string())
    }
}

/// Result type alias using ForgeError
pub type Result<T> = std::result::Result<T, ForgeError>;

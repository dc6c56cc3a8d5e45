use std::fmt;

// === ConfigError ===

/// Errors in the caller-supplied screen configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// No target URL was configured; the screen will stay blank.
    MissingUrl,
    /// The accent tint is not a valid hex color.
    InvalidTintColor(String),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::MissingUrl => write!(f, "No URL configured"),
            ConfigError::InvalidTintColor(color) => {
                write!(f, "Invalid tint color: {}", color)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

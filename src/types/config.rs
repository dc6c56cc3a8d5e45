use serde::{Deserialize, Serialize};

use crate::types::button::{ButtonKind, DonePlacement};
use crate::types::chrome::is_valid_hex_color;
use crate::types::errors::ConfigError;

/// Caller-supplied configuration, held for the screen's lifetime.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScreenConfig {
    /// Target URL. Without one the screen stays blank and logs an error.
    pub url: Option<String>,
    pub done_placement: DonePlacement,
    pub left_items: Vec<ButtonKind>,
    pub right_items: Vec<ButtonKind>,
    /// Actionable kinds only; spacers are inserted during assembly.
    pub toolbar_items: Vec<ButtonKind>,
    /// Accent tint applied to the progress bar and both host bars.
    pub tint_color: Option<String>,
}

impl Default for ScreenConfig {
    fn default() -> Self {
        Self {
            url: None,
            done_placement: DonePlacement::default(),
            left_items: Vec::new(),
            right_items: Vec::new(),
            toolbar_items: vec![
                ButtonKind::Back,
                ButtonKind::Forward,
                ButtonKind::Reload,
                ButtonKind::Share,
            ],
            tint_color: None,
        }
    }
}

impl ScreenConfig {
    /// Configuration for loading the given URL with the default chrome.
    pub fn with_url(url: &str) -> Self {
        Self {
            url: Some(url.to_string()),
            ..Self::default()
        }
    }

    /// Checks the configuration for problems that would leave the screen
    /// blank or mis-tinted. A missing URL is reported but non-fatal at
    /// runtime; the load is simply skipped.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.url.is_none() {
            return Err(ConfigError::MissingUrl);
        }
        if let Some(tint) = &self.tint_color {
            if !is_valid_hex_color(tint) {
                return Err(ConfigError::InvalidTintColor(tint.clone()));
            }
        }
        Ok(())
    }
}

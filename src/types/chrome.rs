use serde::{Deserialize, Serialize};

/// Tint and visibility of one host bar, captured before the screen
/// overrides them and written back when it disappears.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BarSnapshot {
    /// Hex tint color, e.g. "#1f6feb".
    pub tint_color: String,
    pub hidden: bool,
}

impl Default for BarSnapshot {
    fn default() -> Self {
        Self {
            tint_color: "#000000".to_string(),
            hidden: false,
        }
    }
}

/// Validates a hex color string (e.g. "#1f6feb" or "#fff").
pub fn is_valid_hex_color(color: &str) -> bool {
    if !color.starts_with('#') {
        return false;
    }
    let hex = &color[1..];
    matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit())
}

use serde::{Deserialize, Serialize};

/// The fixed set of control purposes a bar slot can hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ButtonKind {
    Back,
    Forward,
    Reload,
    Stop,
    Share,
    Done,
    Spacer,
}

impl ButtonKind {
    /// Spacers fill layout gaps; everything else responds to activation.
    pub fn is_actionable(self) -> bool {
        !matches!(self, ButtonKind::Spacer)
    }
}

/// Where the auto-inserted Done control goes when the screen is
/// presented modally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DonePlacement {
    #[default]
    Left,
    Right,
    None,
}

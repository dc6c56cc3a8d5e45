//! Capability interface over the host application's navigation chrome.
//!
//! The screen holds an `Option` of this; a screen used outside a
//! navigation context simply has no host and every chrome operation
//! degrades to a no-op.

/// The host app's navigation bar, toolbar, and presentation context.
pub trait HostChrome {
    fn navigation_bar_tint(&self) -> String;
    fn set_navigation_bar_tint(&mut self, color: &str);
    fn navigation_bar_hidden(&self) -> bool;
    fn set_navigation_bar_hidden(&mut self, hidden: bool, animated: bool);

    fn toolbar_tint(&self) -> String;
    fn set_toolbar_tint(&mut self, color: &str);
    fn toolbar_hidden(&self) -> bool;
    fn set_toolbar_hidden(&mut self, hidden: bool, animated: bool);

    /// Whether the screen was presented modally rather than pushed onto a
    /// navigation stack. A modal screen owns a Done dismissal path.
    fn is_modal(&self) -> bool;

    /// Present the system share surface for `url`.
    fn share_url(&mut self, url: &str);
    /// Dismiss the screen.
    fn dismiss(&mut self);
}

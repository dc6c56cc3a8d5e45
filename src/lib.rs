//! WebScreen — an embeddable web-browser screen with progress bar and
//! navigation chrome.
//!
//! This library crate exposes all modules for use by the binary and
//! integration tests. The web engine and the host's navigation chrome are
//! consumed through the [`surface::WebSurface`] and [`host::HostChrome`]
//! capability traits; the `gui` feature provides a `wry` + `tao` embedding.

pub mod controls;
pub mod host;
pub mod layout;
pub mod platform;
pub mod progress;
pub mod screen;
pub mod surface;
pub mod sync;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;

pub use screen::WebScreen;
pub use types::config::ScreenConfig;

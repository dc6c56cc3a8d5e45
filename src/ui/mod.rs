//! WebScreen UI layer.
//!
//! Uses `wry` for cross-platform WebView rendering:
//! - Windows: WebView2 (Chromium-based)
//! - Linux: WebKitGTK
//! - macOS: WKWebView
//!
//! The screen's chrome (progress bar plus toolbar) is rendered as
//! HTML/CSS/JS injected into every page. Communication between the Rust
//! component and the injected JS uses wry IPC.

pub mod webview_app;

pub use webview_app::run;
